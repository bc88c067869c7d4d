//! The core ontology of EN 1990 (Eurocode 0, basis of structural design).
//!
//! It covers construction works and the EN 1991-1-1 usage categories of spaces, limit states,
//! design situations, actions and their combinations, effects of actions, materials and
//! resistances. Each concept carries English and Spanish labels and the clause of the standard
//! defining it.

use crate::builder::{BuildError, OntologyBuilder};
use crate::io::LoadedGraph;
use crate::vocab::{cc, dcterms, owl, skos, vann};
use oxrdf::vocab::xsd;
use oxrdf::{Literal, NamedNodeRef};

/// Namespace and IRI of the ontology.
pub const EC1990_NAMESPACE: &str = "http://www.w3id.org/Eurocodes/EC1990#";
/// Prefix used for [`EC1990_NAMESPACE`] when serializing.
pub const EC1990_PREFIX: &str = "ec";

const BOT_NAMESPACE: &str = "https://w3id.org/bot#";
const BOT_ONTOLOGY: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("https://www.w3id.org/bot");
const BOT_BUILDING: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("https://w3id.org/bot#Building");
const BOT_ELEMENT: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("https://w3id.org/bot#Element");
const BOT_HAS_ELEMENT: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("https://w3id.org/bot#hasElement");
const BOT_SPACE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("https://w3id.org/bot#Space");
const BOT_ZONE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("https://w3id.org/bot#Zone");

const TOP_CONCEPTS: [&str; 6] = [
    "Action",
    "EffectOfAction",
    "LimitState",
    "DesignSituation",
    "CombinationOfActions",
    "ConstructionWork",
];

const CONTRIBUTORS: [&str; 3] = [
    "Agnieszka Jedrzejewska (Silesian Unviersity)",
    "Maria Laura Leonardi (University of Minho)",
    "Carlos Ramonell (Politechnical University of Catalonia)",
];

/// Builds the EN 1990 core ontology.
///
/// ```
/// use ontoflow::eurocode_ontology;
/// use oxrdf::vocab::rdfs;
/// use oxrdf::{NamedNodeRef, TripleRef};
///
/// let ontology = eurocode_ontology()?;
/// assert!(ontology.graph.contains(TripleRef::new(
///     NamedNodeRef::new("http://www.w3id.org/Eurocodes/EC1990#STR")?,
///     rdfs::SUB_CLASS_OF,
///     NamedNodeRef::new("http://www.w3id.org/Eurocodes/EC1990#UltimateLimitState")?,
/// )));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn eurocode_ontology() -> Result<LoadedGraph, BuildError> {
    let mut builder = OntologyBuilder::new(EC1990_NAMESPACE, EC1990_PREFIX)?;
    builder
        .bind_prefix("skos", skos::NAMESPACE)
        .bind_prefix("bot", BOT_NAMESPACE)
        .bind_prefix("cc", cc::NAMESPACE)
        .bind_prefix("dcterms", dcterms::NAMESPACE)
        .bind_prefix("vann", vann::NAMESPACE);
    header(&mut builder)?;
    construction_works(&mut builder)?;
    limit_states(&mut builder)?;
    design_situations(&mut builder)?;
    actions(&mut builder)?;
    combinations_of_actions(&mut builder)?;
    effects_of_actions(&mut builder)?;
    materials_and_resistance(&mut builder)?;
    object_properties(&mut builder)?;
    datatype_properties(&mut builder)?;
    disjointness(&mut builder)?;
    Ok(builder.build())
}

fn header(builder: &mut OntologyBuilder) -> Result<(), BuildError> {
    let release_date = Literal::new_typed_literal("2024-12-20", xsd::DATE);
    builder
        .annotate(
            dcterms::CREATOR,
            Literal::new_simple_literal("Carlos Ramonell Cazador (carlos.ramonell@upc.edu)"),
        )
        .annotate(dcterms::DATE, release_date.clone())
        .annotate(dcterms::MODIFIED, release_date)
        .annotate(
            dcterms::TITLE,
            Literal::new_simple_literal("EC - Eurocode Ontology"),
        )
        .annotate(
            dcterms::DESCRIPTION,
            Literal::new_simple_literal(
                "Core ontology formalising knowledge from Eurocode 0 for automated structural design and verification",
            ),
        )
        .annotate(dcterms::FORMAT, Literal::new_simple_literal("ttl"))
        .annotate(dcterms::LANGUAGE, Literal::new_simple_literal("en"))
        .annotate(owl::VERSION_INFO, Literal::new_simple_literal("1.0.0"))
        .annotate(
            vann::PREFERRED_NAMESPACE_PREFIX,
            Literal::new_simple_literal(EC1990_PREFIX),
        )
        .annotate(
            vann::PREFERRED_NAMESPACE_URI,
            Literal::new_simple_literal(EC1990_NAMESPACE),
        )
        .annotate(
            cc::LICENSE,
            Literal::new_simple_literal("http://creativecommons.org/licenses/by/3.0/"),
        )
        .import(BOT_ONTOLOGY);
    for concept in TOP_CONCEPTS {
        let concept = builder.iri(concept)?;
        builder.annotate(skos::HAS_TOP_CONCEPT, concept);
    }
    for contributor in CONTRIBUTORS {
        builder.annotate(dcterms::CONTRIBUTOR, Literal::new_simple_literal(contributor));
    }
    builder
        .annotate(
            dcterms::PUBLISHER,
            Literal::new_simple_literal("Asociación Española de Normalización (UNE)"),
        )
        .annotate(
            dcterms::RIGHTS,
            Literal::new_simple_literal("© UNE 2019 - All rights reserved"),
        );
    Ok(())
}

fn construction_works(builder: &mut OntologyBuilder) -> Result<(), BuildError> {
    builder
        .class("ConstructionWork")?
        .label("Construction Works", "en")?
        .label("Obras de Construcción", "es")?
        .comment("Everything that is constructed or results from construction operations. The term covers both building and civil engineering works comprising structural, non-structural and geotechnical elements.", "en")?
        .source("EN 1990:2002, Section 1.5.1.1")
        .definition("Everything that is constructed or results from construction operations. The term covers both building and civil engineering works comprising structural, non-structural and geotechnical elements.")
        .example("building, bridge, nuclea power plant");
    builder
        .class("Building")?
        .sub_class_of("ConstructionWork")?
        .add(owl::SAME_AS, BOT_BUILDING)
        .label("Building", "en")?
        .label("Edificio", "es")?
        .comment("Type of construction works for building purposes such as dwelling houses, office buildings, etc.", "en")?
        .source("EN 1990:2002, Section 1.5.1.2")
        .definition("Type of construction works for building purposes such as dwelling houses, office buildings, etc.")
        .example("dwelling house, office building, industrial building");
    builder
        .class("CivilEngineeringWork")?
        .sub_class_of("ConstructionWork")?
        .label("Civil Engineering Work", "en")?
        .label("Obra de Ingeniería Civil", "es")?
        .comment("Type of construction works for civil engineering purposes such as bridges, retaining walls, etc.", "en")?
        .source("EN 1990:2002, Section 1.5.1.2")
        .example("bridge, retaining wall, tunnel");
    builder
        .class("StructuralMember")?
        .sub_class_of_iri(BOT_ELEMENT)
        .label("Structural Member", "en")?
        .label("Elemento Estructural", "es")?
        .comment("Physically distinguishable part of a structure, e.g. a column, a beam, a slab, a foundation pile.", "en")?
        .source("EN 1990:200, Section 1.5.1.7")
        .example("column, beam, slab, foundation pile");
    builder
        .class("EurocodeSpace")?
        .sub_class_of_iri(BOT_SPACE)
        .label("Eurocode Space", "en")?
        .label("Espacio Eurocódigo", "es")?
        .comment("A space classified according to EN 1991-1-1 usage categories", "en")?
        .source("EN 1991-1-1:2002 Table 6.1");
    builder
        .class("Residential")?
        .sub_class_of("EurocodeSpace")?
        .label("Category A - Domestic and Residential", "en")?
        .label("Categoría A - Doméstico y Residencial", "es")?
        .comment("Areas for domestic and residential activities", "en")?
        .source("EN 1991-1-1:2002 Table 6.1")
        .example("Rooms in residential buildings and houses, bedrooms and wards in hospitals, bedrooms in hotels and hostels, kitchens and toilets");
    builder
        .class("OfficeArea")?
        .sub_class_of("EurocodeSpace")?
        .label("Category B - Office Areas", "en")?
        .label("Categoría B - Áreas de Oficina", "es")?
        .comment("Office areas", "en")?
        .source("EN 1991-1-1:2002 Table 6.1")
        .example("General office spaces");
    builder
        .class("CongregationArea")?
        .sub_class_of("EurocodeSpace")?
        .label("Category C - Congregation Areas", "en")?
        .label("Categoría C - Áreas de Congregación", "es")?
        .comment("Areas where people may congregate (except areas under category A, B, and D)", "en")?
        .source("EN 1991-1-1:2002 Table 6.1");
    builder
        .class("AreaWithTables")?
        .sub_class_of("CongregationArea")?
        .label("Category C1 - Areas with tables", "en")?
        .label("Categoría C1 - Áreas con mesas", "es")?
        .comment("Areas with tables", "en")?
        .source("EN 1991-1-1:2002 Table 6.1")
        .example("Areas in schools, cafés, restaurants, dining halls, reading rooms, receptions");
    builder
        .class("AreasWithFixedSeats")?
        .sub_class_of("CongregationArea")?
        .label("Category C2 - Areas with fixed seats", "en")?
        .label("Categoría C2 - Áreas con asientos fijos", "es")?
        .comment("Areas with fixed seats", "en")?
        .source("EN 1991-1-1:2002 Table 6.1")
        .example("Areas in churches, theatres or cinemas, conference rooms, lecture halls, assembly halls, waiting rooms, railway waiting rooms");
    builder
        .class("AreasWithoutObstacle")?
        .sub_class_of("CongregationArea")?
        .label("Category C3 - Areas without obstacles", "en")?
        .label("Categoría C3 - Áreas sin obstáculos", "es")?
        .comment("Areas without obstacles for moving people", "en")?
        .source("EN 1991-1-1:2002 Table 6.1")
        .example("Areas in museums, exhibition rooms, etc. and access areas in public and administration buildings, hotels, hospitals, railway station forecourts");
    builder
        .class("PhysicalActivitiesAreas")?
        .sub_class_of("CongregationArea")?
        .label("Category C4 - Physical activities areas", "en")?
        .label("Categoría C4 - Áreas de actividades físicas", "es")?
        .comment("Areas with possible physical activities", "en")?
        .source("EN 1991-1-1:2002 Table 6.1")
        .example("Dance halls, gymnastic rooms, stages");
    builder
        .class("LargeCrowdsAreas")?
        .sub_class_of("CongregationArea")?
        .label("Category C5 - Large crowds areas", "en")?
        .label("Categoría C5 - Áreas de grandes multitudes", "es")?
        .comment("Areas susceptible to large crowds", "en")?
        .source("EN 1991-1-1:2002 Table 6.1")
        .example("Buildings for public events like concert halls, sports halls including stands, terraces and access areas and railway platforms");
    builder
        .class("ShoppingAreas")?
        .sub_class_of("EurocodeSpace")?
        .label("Category D - Shopping Areas", "en")?
        .label("Categoría D - Áreas Comerciales", "es")?
        .comment("Shopping areas", "en")?
        .source("EN 1991-1-1:2002 Table 6.1");
    builder
        .class("GeneralRetailShops")?
        .sub_class_of("ShoppingAreas")?
        .label("Category D1 - General retail shops", "en")?
        .label("Categoría D1 - Tiendas minoristas generales", "es")?
        .comment("Areas in general retail shops", "en")?
        .source("EN 1991-1-1:2002 Table 6.1")
        .example("General retail shops");
    builder
        .class("DepartmentStore")?
        .sub_class_of("ShoppingAreas")?
        .label("Category D2 - Department stores", "en")?
        .label("Categoría D2 - Grandes almacenes", "es")?
        .comment("Areas in department stores", "en")?
        .source("EN 1991-1-1:2002 Table 6.1")
        .example("Department stores");
    builder
        .class("IndustrialandStorage")?
        .sub_class_of("EurocodeSpace")?
        .label("Category E - Storage and Industrial", "en")?
        .label("Categoría E - Almacenamiento e Industrial", "es")?
        .comment("Storage and industrial areas", "en")?
        .source("EN 1991-1-1:2002 Table 6.3");
    builder
        .class("StorageAreas")?
        .sub_class_of("IndustrialandStorage")?
        .label("Category E1 - Storage areas", "en")?
        .label("Categoría E1 - Áreas de almacenamiento", "es")?
        .comment("Areas susceptible to accumulation of goods, including access areas", "en")?
        .source("EN 1991-1-1:2002 Table 6.3")
        .example("Areas for storage use including storage of books and other documents");
    builder
        .class("IndustrialUse")?
        .sub_class_of("IndustrialandStorage")?
        .label("Category E2 - Industrial use", "en")?
        .label("Categoría E2 - Uso industrial", "es")?
        .comment("Industrial use areas", "en")?
        .source("EN 1991-1-1:2002 Table 6.3")
        .example("Industrial facilities");
    builder
        .class("LightVehicleTraffic")?
        .sub_class_of("EurocodeSpace")?
        .label("Category F - Light Vehicle Traffic", "en")?
        .label("Categoría F - Tráfico de Vehículos Ligeros", "es")?
        .comment("Traffic and parking areas for light vehicles (≤ 30 kN gross vehicle weight and ≤ 8 seats not including driver)", "en")?
        .source("EN 1991-1-1:2002 Table 6.7")
        .example("Garages, parking areas, parking halls");
    builder
        .class("MediumVehicleTraffic")?
        .sub_class_of("EurocodeSpace")?
        .label("Category G - Medium Vehicle Traffic", "en")?
        .label("Categoría G - Tráfico de Vehículos Medianos", "es")?
        .comment("Traffic and parking areas for medium vehicles (>30 kN, ≤ 160 kN gross vehicle weight, on 2 axles)", "en")?
        .source("EN 1991-1-1:2002 Table 6.7")
        .example("Access routes, delivery zones, zones accessible to fire engines (≤ 160 kN gross vehicle weight)");
    builder
        .class("Roof")?
        .sub_class_of("EurocodeSpace")?
        .label("Category H - Roofs", "en")?
        .label("Categoría H - Cubiertas", "es")?
        .comment("Roofs not accessible except for normal maintenance and repair", "en")?
        .source("EN 1991-1-1:2002 Table 6.9")
        .example("Roofs accessible only for maintenance");
    builder
        .class("AccessibleRoofs")?
        .sub_class_of("EurocodeSpace")?
        .label("Category I - Accessible Roofs", "en")?
        .label("Categoría I - Cubiertas Accesibles", "es")?
        .comment("Roofs accessible with occupancy according to categories A to G", "en")?
        .source("EN 1991-1-1:2002 Table 6.9")
        .example("Roofs used as terraces, gardens, or other occupied spaces");
    builder
        .class("HelicopterLandingAreas")?
        .sub_class_of("EurocodeSpace")?
        .label("Category K - Helicopter Landing Areas", "en")?
        .label("Categoría K - Áreas de Aterrizaje de Helicópteros", "es")?
        .comment("Roofs accessible for special services, such as helicopter landing areas", "en")?
        .source("EN 1991-1-1:2002 Table 6.9")
        .example("Helicopter landing pads on roofs");
    builder
        .class("Structure")?
        .label("Structure", "en")?
        .label("Estructura", "es")?
        .comment("Organised combination of connected parts designed to carry loads and provide adequate rigidity.", "en")?
        .source("EN 1990:2002, Section 1.5.1.6")
        .example("Residential building, reatining wall, suspension bridge, underground tunnel");
    builder
        .class("StructuralSystem")?
        .label("Structural System", "en")?
        .label("Sistema Estructural", "es")?
        .comment("Load-bearing members of a building or civil engineering works and the way in which these members function together.", "en")?
        .source("EN 1990:2002, Section 1.5.1.9")
        .example("Flat-slab system with drop panels, steel potal frame, cable-stayed bridge system, trussed roof system");
    Ok(())
}

fn limit_states(builder: &mut OntologyBuilder) -> Result<(), BuildError> {
    builder
        .class("LimitState")?
        .label("Limit State", "en")?
        .label("Estado Límite", "es")?
        .comment("State beyond which the structure no longer fulfils the relevant design criteria.", "en")?
        .source("EN 1990:2002, Section 1.5.2.12")
        .definition("State beyond which the structure no longer fulfils the relevant design criteria.")
        .add(skos::EDITORIAL_NOTE, Literal::new_simple_literal("Limit states define critical conditions that must not be exceeded to ensure structural safety and serviceability"));
    builder
        .class("UltimateLimitState")?
        .sub_class_of("LimitState")?
        .label("Ultimate Limit State", "en")?
        .label("Estado Límite Último", "es")?
        .comment("State associated with collapse or with other similar forms of structural failure. They generally correspond to the maximum load-carrying resistance of a structure or structural member.", "en")?
        .source("EN 1990:2002, Section 1.5.2.13")
        .alt_label("ULS");
    builder
        .class("ServiceabilityLimitState")?
        .sub_class_of("LimitState")?
        .label("Serviceability Limit State", "en")?
        .label("Estado Límite de Servicio", "es")?
        .comment("State that correspond to conditions beyond which specified service requirements for a structure or structural member are no longer met.", "en")?
        .source("EN 1990:2002, Section 1.5.2.14")
        .alt_label("SLS");
    builder
        .class("EQU")?
        .sub_class_of("UltimateLimitState")?
        .label("Static Equilibrium", "en")?
        .comment("Loss of static equilibrium of the structure or any part of it considered as a rigid body.", "en")?
        .source("EN 1990:2002, Section 6.4.1(1)P a)");
    builder
        .class("STR")?
        .sub_class_of("UltimateLimitState")?
        .label("Structural Resistance", "en")?
        .comment("Internal failure or excessive deformation of the structure or structural members where the strength of construction materials governs.", "en")?
        .source("EN 1990:2002, Section 6.4.1(1)P b)");
    builder
        .class("GEO")?
        .sub_class_of("UltimateLimitState")?
        .label("Geotechnical Failure", "en")?
        .comment("Failure or excessive deformation of the ground where the strengths of soil or rock are significant in providing resistance.", "en")?
        .source("EN 1990:2002, Section 6.4.1(1)P c)");
    builder
        .class("FAT")?
        .sub_class_of("UltimateLimitState")?
        .label("Fatigue Failure", "en")?
        .comment("Fatigue failure of the structure or structural members.", "en")?
        .source("EN 1990:2002, Section 6.4.1(1)P d)");
    builder
        .class("UPL")?
        .sub_class_of("UltimateLimitState")?
        .label("Uplift Failure", "en")?
        .comment("Loss of equilibrium of the structure or the ground due to uplift by water pressure (buoyancy) or other vertical actions.", "en")?
        .source("EN 1990:2002/A1:2005, Section 6.4.1(1)P e)");
    builder
        .class("HYD")?
        .sub_class_of("UltimateLimitState")?
        .label("Hydraulic Failure", "en")?
        .comment("Hydraulic heave, internal erosion and piping in the ground caused by hydraulic gradients.", "en")?
        .source("EN 1990:2002/A1:2005, Section 6.4.1(1)P f)");
    builder
        .class("ReversibleServiceabilityLimitState")?
        .sub_class_of("ServiceabilityLimitState")?
        .label("Reversible Serviceability Limit State", "en")?
        .comment("Serviceability limit state where no consequences of actions exceeding the specified service requirements will remain when the actions are removed.", "en")?
        .source("UNE-EN 1990:2019, Section 1.5.2.14.2");
    builder
        .class("IrreversibleServiceabilityLimitState")?
        .sub_class_of("ServiceabilityLimitState")?
        .label("Irreversible Serviceability Limit State", "en")?
        .comment("Serviceability limit state where some consequences of actions exceeding the specified service requirements will remain when the actions are removed.", "en")?
        .source("UNE-EN 1990:2019, Section 1.5.2.14.1");
    Ok(())
}

fn design_situations(builder: &mut OntologyBuilder) -> Result<(), BuildError> {
    builder
        .class("DesignSituation")?
        .label("Design Situation", "en")?
        .label("Situación de Proyecto", "es")?
        .comment("Sets of physical conditions representing the real conditions occurring during a certain time interval for which the design will demonstrate that relevant limit states are not exceeded.", "en")?
        .source("EN 1990:2002, Section 1.5.2.2");
    builder
        .class("PersistentDesignSituation")?
        .sub_class_of("DesignSituation")?
        .label("Persistent Design Situation", "en")?
        .label("Situación de Proyecto Persistente", "es")?
        .comment("Design situation that is relevant during a period of the same order as the design working life of the structure. Generally refers to conditions of normal use.", "en")?
        .source("EN 1990:2002, Section 1.5.2.4");
    builder
        .class("TransientDesignSituation")?
        .sub_class_of("DesignSituation")?
        .label("Transient Design Situation", "en")?
        .label("Situación de Proyecto Transitoria", "es")?
        .comment("Design situation that is relevant during a period much shorter than the design working life of the structure and which has a high probability of occurrence, e.g. during construction or repair.", "en")?
        .source("EN 1990:2002, Section 1.5.2.3")
        .example("construction phase, repair operations");
    builder
        .class("AccidentalDesignSituation")?
        .sub_class_of("DesignSituation")?
        .label("Accidental Design Situation", "en")?
        .label("Situación de Proyecto Accidental", "es")?
        .comment("Design situation involving exceptional conditions of the structure or its exposure, including fire, explosion, impact or local failure.", "en")?
        .source("EN 1990:2002, Section 1.5.2.5")
        .example("fire, explosion, impact, local failure");
    builder
        .class("FireDesignSituation")?
        .sub_class_of("AccidentalDesignSituation")?
        .label("Fire Design Situation", "en")?
        .comment("Accidental design situation involving fire conditions requiring specific design considerations.", "en")?
        .source("EN 1990:2002, Section 1.5.2.5 & 6");
    builder
        .class("ExplosionDesignSituation")?
        .sub_class_of("AccidentalDesignSituation")?
        .label("Explosion Design Situation", "en")?
        .comment("Accidental design situation involving explosion conditions.", "en")?
        .source("EN 1990:2002, Section 1.5.2.5");
    builder
        .class("ImpactDesignSituation")?
        .sub_class_of("AccidentalDesignSituation")?
        .label("Impact Design Situation", "en")?
        .comment("Accidental design situation involving impact conditions.", "en")?
        .source("EN 1990:2002, Section 1.5.2.5");
    builder
        .class("LocalizedFailureDesignSituation")?
        .sub_class_of("AccidentalDesignSituation")?
        .label("Localized Failure Design Situation", "en")?
        .comment("Accidental design situation involving local failure conditions.", "en")?
        .source("EN 1990:2002, Section 1.5.2.5");
    builder
        .class("SeismicDesignSituation")?
        .sub_class_of("DesignSituation")?
        .label("Seismic Design Situation", "en")?
        .label("Situación de Proyecto Sísmica", "es")?
        .comment("Design situation involving exceptional conditions of the structure when subjected to a seismic event.", "en")?
        .source("EN 1990:2002, Section 1.5.2.7");
    Ok(())
}

fn actions(builder: &mut OntologyBuilder) -> Result<(), BuildError> {
    builder
        .class("Action")?
        .label("Action", "en")?
        .label("Acción", "es")?
        .comment("Set of forces (loads) applied to the structure (direct action) or set of imposed deformations or accelerations caused for example, by temperature changes, moisture variation, uneven settlement or earthquakes (indirect action).", "en")?
        .source("EN 1990:2002, Section 1.5.3.1")
        .definition("Set of forces (loads) applied to the structure (direct action) or set of imposed deformations or accelerations caused for example, by temperature changes, moisture variation, uneven settlement or earthquakes (indirect action).")
        .example("dead load, imopsed load, wind load, thermal action")
        .alt_label("F");
    builder
        .class("DirectAction")?
        .sub_class_of("Action")?
        .label("Direct Action", "en")?
        .comment("Set of forces (loads) applied to the structure.", "en")?
        .source("EN 1990:2002, Section 1.5.3.1 a)");
    builder
        .class("IndirectAction")?
        .sub_class_of("Action")?
        .label("Indirect Action", "en")?
        .comment("Set of imposed deformations or accelerations caused for example, by temperature changes, moisture variation, uneven settlement or earthquakes.", "en")?
        .source("EN 1990:2002, Section 1.5.3.1 b)");
    builder
        .class("PermanentAction")?
        .sub_class_of("Action")?
        .label("Permanent Action", "en")?
        .label("Acción Permanente", "es")?
        .comment("Action that is likely to act throughout a given reference period and for which the variation in magnitude with time is negligible, or for which the variation is always in the same direction (monotonic) until the action attains a certain limit value.", "en")?
        .source("EN 1990:2002, Section 1.5.3.3")
        .example("self-weight, fixed equipment")
        .alt_label("G");
    builder
        .class("VariableAction")?
        .sub_class_of("Action")?
        .label("Variable Action", "en")?
        .label("Acción Variable", "es")?
        .comment("Action for which the variation in magnitude with time is neither negligible nor monotonic.", "en")?
        .source("EN 1990:2002, Section 1.5.3.4")
        .example("imposed loads, wind, snow, thermal actions")
        .alt_label("Q");
    builder
        .class("AccidentalAction")?
        .sub_class_of("Action")?
        .label("Accidental Action", "en")?
        .label("Acción Accidental", "es")?
        .comment("Action, usually of short duration but of significant magnitude, that is unlikely to occur on a given structure during the design working life.", "en")?
        .source("EN 1990:2002, Section 1.5.3.5")
        .example("explosions, impact from vehicles")
        .alt_label("A");
    builder
        .class("SeismicAction")?
        .sub_class_of("AccidentalAction")?
        .label("Seismic Action", "en")?
        .label("Acción Sísmica", "es")?
        .comment("Action that arises due to earthquake ground motions.", "en")?
        .source("EN 1990:2002, Section 1.5.3.6")
        .alt_label("A_E");
    builder
        .class("FixedAction")?
        .sub_class_of("Action")?
        .label("Fixed Action", "en")?
        .comment("Action that has a fixed distribution and position over the structure or structural member such that the magnitude and direction of the action are determined unambiguously for the whole structure.", "en")?
        .source("EN 1990:2002, Section 1.5.3.8")
        .example("Stored goods in a defined storage area with no alternative placement");
    builder
        .class("FreeAction")?
        .sub_class_of("Action")?
        .label("Free Action", "en")?
        .comment("Action that may have various spatial distributions over the structure.", "en")?
        .source("EN 1990:2002, Section 1.5.3.9")
        .example("Imposed floor load on individual rooms of a multi-storey building");
    builder
        .class("StaticAction")?
        .sub_class_of("Action")?
        .label("Static Action", "en")?
        .comment("Action that does not cause significant acceleration of the structure or structural members.", "en")?
        .source("EN 1990:2002, Section 1.5.3.11");
    builder
        .class("DynamicAction")?
        .sub_class_of("Action")?
        .label("Dynamic Action", "en")?
        .comment("Action that causes significant acceleration of the structure or structural members.", "en")?
        .source("EN 1990:2002, Section 1.5.3.12");
    builder
        .class("QuasiStaticAction")?
        .sub_class_of("DynamicAction")?
        .label("Quasi-Static Action", "en")?
        .comment("Dynamic action represented by an equivalent static action in a static model.", "en")?
        .source("EN 1990:2002, Section 1.5.3.13");
    builder
        .class("GeotechnicalAction")?
        .sub_class_of("Action")?
        .label("Geotechnical Action", "en")?
        .comment("Action transmitted to the structure by the ground, fill or groundwater.", "en")?
        .source("EN 1990:2002, Section 1.5.3.7");
    Ok(())
}

fn combinations_of_actions(builder: &mut OntologyBuilder) -> Result<(), BuildError> {
    builder
        .class("CombinationOfActions")?
        .label("Combination of Actions", "en")?
        .label("Combinación de Acciones", "es")?
        .comment("Set of design values used for the verification of the structural reliability for a limit state under the simultaneous influence of different actions.", "en")?
        .source("EN 1990:2002, Section 1.5.3.22")
        .definition("Set of design values used for the verification of the structural reliability for a limit state under the simultaneous influence of different actions.");
    builder
        .class("ULSCombination")?
        .sub_class_of("CombinationOfActions")?
        .label("Ultimate Limit State Combination", "en")?
        .label("Combinacion ELU", "es")?
        .comment("Combination of actions for verifying ultimate limit states.", "en")?
        .source("EN 1990:2002, Section 6.4.3");
    builder
        .class("FundamentalCombination")?
        .sub_class_of("ULSCombination")?
        .label("Fundamental Combination", "en")?
        .label("Combinación Fundamental", "es")?
        .comment("Combination of actions for persistent or transient design situations.", "en")?
        .source("EN 1990:2002, Section 6.4.3.2")
        .add(skos::SCOPE_NOTE, Literal::new_simple_literal("Used for persistent and transient design situations in ULS verifications"));
    builder
        .class("AccidentalCombination")?
        .sub_class_of("ULSCombination")?
        .label("Accidental Combination", "en")?
        .label("Combinación Accidental", "es")?
        .comment("Combination of actions for accidental design situations.", "en")?
        .source("EN 1990:2002, Section 6.4.3.3")
        .add(skos::SCOPE_NOTE, Literal::new_simple_literal("Used for accidental design situations in ULS verifications"));
    builder
        .class("SeismicCombination")?
        .sub_class_of("ULSCombination")?
        .label("Seismic Combination", "en")?
        .label("Combinación Sísmica", "es")?
        .comment("Combination of actions for seismic design situations.", "en")?
        .source("EN 1990:2002, Section 6.4.3.4")
        .add(skos::SCOPE_NOTE, Literal::new_simple_literal("Used for seismic design situations in ULS verifications"));
    builder
        .class("SLSCombination")?
        .sub_class_of("CombinationOfActions")?
        .label("Serviceability Limit State Combination", "en")?
        .label("Combinaciones ELS", "es")?
        .comment("Combinations of actions for verifying serviceability limit states.", "en")?
        .source("EN 1990:2002, Section 6.5.3");
    builder
        .class("CharacteristicCombination")?
        .sub_class_of("SLSCombination")?
        .label("Characteristic Combination", "en")?
        .label("Combinación Característica", "es")?
        .comment("Serviceability combination normally used for irreversible limit states.", "en")?
        .source("EN 1990:2002, Section 6.5.3(2)a")
        .add(skos::SCOPE_NOTE, Literal::new_simple_literal("Used for irreversible serviceability limit state verifications"));
    builder
        .class("FrequentCombination")?
        .sub_class_of("SLSCombination")?
        .label("Frequent Combination", "en")?
        .label("Combinación Frecuente", "es")?
        .comment("Serviceability combination normally used for reversible limit states.", "en")?
        .source("EN 1990:2002, Section 6.5.3(2)b")
        .add(skos::SCOPE_NOTE, Literal::new_simple_literal("Used for reversible serviceability limit state verifications"));
    builder
        .class("QuasiPermanentCombination")?
        .sub_class_of("SLSCombination")?
        .label("Quasi-Permanent Combination", "en")?
        .label("Combinación Cuasi-permanente", "es")?
        .comment("Serviceability combination normally used for long-term effects and the appearance of the structure.", "en")?
        .source("EN 1990:2002, Section 6.5.3(2)c")
        .add(skos::SCOPE_NOTE, Literal::new_simple_literal("Used for long-term effects and appearance considerations"));
    Ok(())
}

fn effects_of_actions(builder: &mut OntologyBuilder) -> Result<(), BuildError> {
    builder
        .class("EffectOfAction")?
        .label("Effect of Action", "en")?
        .label("Efecto de las Acciones", "es")?
        .comment("Effect of actions on structural members (e.g. internal force, moment, stress, strain) or on the whole structure (e.g. deflection, rotation).", "en")?
        .source("EN 1990:2002, Section 1.5.3.2")
        .definition("Effect of actions on structural members (e.g. internal force, moment, stress, strain) or on the whole structure (e.g. deflection, rotation).")
        .example("internal force, moment, stress, strain, deflection, rotation")
        .alt_label("E")
        .add(skos::EDITORIAL_NOTE, Literal::new_simple_literal("Effects of actions can be calculated through structural analysis and must be compared against resistance for verification"));
    builder
        .class("MechanicalEffect")?
        .sub_class_of("EffectOfAction")?
        .label("Mechanical Effect", "en")?
        .comment("Effect of actions in the form of forces, stresses, or strains in structural members.", "en")?;
    builder
        .class("DeformationEffect")?
        .sub_class_of("EffectOfAction")?
        .label("Deformation Effect", "en")?
        .comment("Effect of actions in the form of deformations of the structure or structural members.", "en")?;
    builder
        .class("DynamicEffect")?
        .sub_class_of("EffectOfAction")?
        .label("Dynamic Effect", "en")?
        .comment("Effect of actions involving dynamic response, acceleration, or vibration.", "en")?;
    builder
        .class("TimeDependentEffect")?
        .sub_class_of("EffectOfAction")?
        .label("Time-Dependent Effect", "en")?
        .comment("Effect of actions that varies with time due to material behavior or other time-related factors.", "en")?
        .source("UNE-EN 1990:2019, Section 3.1(5)");
    builder
        .class("InternalForce")?
        .sub_class_of("MechanicalEffect")?
        .label("Internal Force", "en")?
        .label("Fuerza Interna", "es")?
        .comment("Effect of actions in the form of internal forces in structural members.", "en")?
        .source("EN 1990:2002, Section 1.5.3.2");
    builder
        .class("BendingMoment")?
        .sub_class_of("InternalForce")?
        .label("Bending Moment", "en")?
        .label("Momento Flector", "es")?
        .comment("Internal moment causing bending in structural members.", "en")?
        .source("EN 1990:2002, Section 1.5.3.2")
        .alt_label("M");
    builder
        .class("AxialForce")?
        .sub_class_of("InternalForce")?
        .label("Axial Force", "en")?
        .label("Fuerza Axial", "es")?
        .comment("Internal force acting along the axis of structural members.", "en")?
        .source("EN 1990:2002, Section 1.5.3.2")
        .alt_label("N");
    builder
        .class("ShearForce")?
        .sub_class_of("InternalForce")?
        .label("Shear Force", "en")?
        .label("Fuerza Cortante", "es")?
        .comment("Internal force acting perpendicular to the axis of structural members.", "en")?
        .source("EN 1990:2002, Section 1.5.3.2")
        .alt_label("V");
    builder
        .class("TorsionalMoment")?
        .sub_class_of("InternalForce")?
        .label("Torsional Moment", "en")?
        .label("Momento Torsor", "es")?
        .comment("Internal moment causing twisting in structural members.", "en")?
        .source("EN 1990:2002, Section 1.5.3.2")
        .alt_label("T");
    builder
        .class("Stress")?
        .sub_class_of("MechanicalEffect")?
        .label("Stress", "en")?
        .label("Tensión", "es")?
        .comment("Internal stress in structural members due to actions.", "en")?
        .source("EN 1990:2002, Section 1.5.3.2");
    builder
        .class("NormalStress")?
        .sub_class_of("Stress")?
        .label("Normal Stress", "en")?
        .comment("Stress acting in the direction normal to a surface.", "en")?;
    builder
        .class("ShearStress")?
        .sub_class_of("Stress")?
        .label("Shear Stress", "en")?
        .comment("Stress acting in the direction parallel (tangential) to a surface.", "en")?;
    builder
        .class("PrincipalStress")?
        .sub_class_of("Stress")?
        .label("Principal Stress", "en")?
        .comment("Maximum or minimum normal stress at a point.", "en")?;
    builder
        .class("Strain")?
        .sub_class_of("MechanicalEffect")?
        .label("Strain", "en")?
        .label("Deformación Unitaria", "es")?
        .comment("Deformation per unit length in structural members.", "en")?
        .source("EN 1990:2002, Section 1.5.3.2");
    builder
        .class("Deformation")?
        .sub_class_of("DeformationEffect")?
        .label("Deformation", "en")?
        .label("Deformación", "es")?
        .comment("Change in shape or size of a structure or structural member due to actions.", "en")?
        .source("EN 1990:2002, Section 1.5.3.2");
    builder
        .class("LinearDeformation")?
        .sub_class_of("Deformation")?
        .label("Linear Deformation", "en")?
        .comment("Deformation involving linear displacement of points in the structure.", "en")?;
    builder
        .class("Deflection")?
        .sub_class_of("LinearDeformation")?
        .label("Deflection", "en")?
        .label("Flecha", "es")?
        .comment("Vertical deflction of a structural member.", "en")?
        .source("EN 1990:2002, Section 1.6")
        .alt_label("w");
    builder
        .class("Displacement")?
        .sub_class_of("LinearDeformation")?
        .label("Displacement", "en")?
        .label("Desplazamiento", "es")?
        .comment("Horizontal displacement of a structure or structural member.", "en")?
        .source("EN 1990:2002, Section 1.6")
        .alt_label("u");
    builder
        .class("AngularDeformation")?
        .sub_class_of("Deformation")?
        .label("Angular Deformation", "en")?
        .comment("Deformation involving rotation or angular change in the structure.", "en")?
        .source("EN 1990:2002, Section 1.5.3.2");
    builder
        .class("Rotation")?
        .sub_class_of("AngularDeformation")?
        .label("Rotation", "en")?
        .label("Rotación", "es")?
        .comment("Angular rotation of a structure or structural member.", "en")?
        .source("EN 1990:2002, Section 1.5.3.2");
    builder
        .class("Twist")?
        .sub_class_of("AngularDeformation")?
        .label("Twist", "en")?
        .label("Torsión", "es")?
        .comment("Angular deformation about the longitudinal axis.", "en")?;
    builder
        .class("VolumetricDeformation")?
        .sub_class_of("Deformation")?
        .label("Volumetric Deformation", "en")?
        .comment("Deformation involving change in volume of structural elements.", "en")?;
    builder
        .class("AccelerationEffect")?
        .sub_class_of("DynamicEffect")?
        .label("Acceleration Effect", "en")?
        .comment("Effect involving acceleration of the structure or structural members.", "en")?
        .source("EN 1990:2002, Section 4.1.5(2)");
    builder
        .class("VibrationResponse")?
        .sub_class_of("DynamicEffect")?
        .label("Vibration Response", "en")?
        .label("Respuesta Vibratoria", "es")?
        .comment("Dynamic response of structures to oscillatory actions, important for serviceability considerations.", "en")?;
    builder
        .class("CreepEffect")?
        .sub_class_of("TimeDependentEffect")?
        .label("Creep Effect", "en")?
        .label("Efecto de Fluencia", "es")?
        .comment("Long-term deformation effect due to sustained loading.", "en")?;
    builder
        .class("ShrinkageEffect")?
        .sub_class_of("TimeDependentEffect")?
        .label("Shrinkage Effect", "en")?
        .label("Efecto de Retracción", "es")?
        .comment("Deformation effect due to material shrinkage over time.", "en")?;
    builder
        .class("FatigueEffect")?
        .sub_class_of("TimeDependentEffect")?
        .label("Fatigue Effect", "en")?
        .label("Efecto de Fatiga", "es")?
        .comment("Progressive damage effect due to repeated loading cycles.", "en")?
        .source("EN 1990:2002, Section 3.1(5)");
    builder
        .class("Reaction")?
        .sub_class_of("EffectOfAction")?
        .label("Reaction", "en")?
        .label("Reacción", "es")?
        .comment("Support reaction force or moment at structural supports.", "en")?
        .source("EN 1990:2002, Section 1.5.3.2");
    Ok(())
}

fn materials_and_resistance(builder: &mut OntologyBuilder) -> Result<(), BuildError> {
    builder
        .class("Material")?
        .label("Material", "en")?
        .label("Material", "es")?
        .comment("Indication of the principal structural material.", "en")?
        .source("EN 1990:2002, Section 1.5.1.3");
    builder
        .class("MaterialProperty")?
        .label("Material Property", "en")?
        .label("Propiedad del Material", "es")?
        .comment("Physical or mechanical property of construction materials.", "en")?
        .source("EN 1990:2002, Section 4.2");
    builder
        .class("GeometricalProperty")?
        .label("Geometrical Data", "en")?
        .label("Datos Geométricos", "es")?
        .comment("Geometrical properties and dimensions of structural elements.", "en")?
        .source("EN 1990:2002, Section 4.3");
    builder
        .class("Resistance")?
        .label("Resistance", "en")?
        .label("Resistencia", "es")?
        .comment("Capacity of a member or component, or a cross-section of a member or component of a structure, to withstand actions without mechanical failure.", "en")?
        .source("EN 1990:2002, Section 1.5.2.15")
        .example("bending resistance, buckling resistance, tension resistance")
        .alt_label("R");
    builder
        .class("DesignWorkingLife")?
        .label("Design Working Life", "en")?
        .label("Vida Útil de Proyecto", "es")?
        .comment("Assumed period for which a structure or part of it is to be used for its intended purpose with anticipated maintenance but without major repair being necessary.", "en")?
        .source("EN 1990:2002, Section 1.5.2.8");
    Ok(())
}

fn object_properties(builder: &mut OntologyBuilder) -> Result<(), BuildError> {
    builder
        .object_property("containsAction")?
        .domain("CombinationOfActions")?
        .range("Action")?
        .label("contains action", "en")?
        .label("contiene acción", "es")?
        .comment("Relates a combination of actions to the individual actions it contains.", "en")?;
    builder
        .object_property("causesEffect")?
        .domain("CombinationOfActions")?
        .range("EffectOfAction")?
        .label("causes effect", "en")?
        .label("causa efecto", "es")?
        .comment("Relates a combination of actions to the effects it causes in the structure.", "en")?;
    builder
        .object_property("appliesTo")?
        .domain("Action")?
        .range("StructuralMember")?
        .label("applies to", "en")?
        .label("se aplica a", "es")?
        .comment("Relates an action to the structural member or structure it acts upon.", "en")?;
    builder
        .object_property("isDesignedFor")?
        .domain("StructuralMember")?
        .range("DesignSituation")?
        .label("is designed for", "en")?
        .label("se aplica a", "es")?
        .comment("Relates a structural memeber with the design situation it is designed for.", "en")?;
    builder
        .object_property("requiresVerficationOf")?
        .domain("DesignSituation")?
        .range("LimitState")?
        .label("requires verification of", "en")?
        .label("requiere verificación de", "es")?
        .comment("Relates a limit state to the combination of actions used for its verification.", "en")?;
    builder
        .object_property("verifiedBy")?
        .domain("LimitState")?
        .range("CombinationOfActions")?
        .label("verified by", "en")?
        .label("verificado por", "es")?
        .comment("Relates a limit state to the combination of actions used for its verification.", "en")?;
    builder
        .object_property("hasResistance")?
        .domain("StructuralMember")?
        .range("Resistance")?
        .label("has resistance", "en")?
        .comment("Relates a structural member to its resistance capacity.", "en")?;
    builder
        .object_property("isMadeOf")?
        .domain("StructuralMember")?
        .range("Material")?
        .label("is made of", "en")?
        .comment("Relates a structural member to the material which it is made of.", "en")?;
    builder
        .object_property("hasMaterialProperty")?
        .domain("Material")?
        .range("MaterialProperty")?
        .label("has Property", "en")?
        .comment("Relates a material with its properties.", "en")?;
    builder
        .object_property("hasGeometricalProperty")?
        .domain("StructuralMember")?
        .range("GeometricalProperty")?
        .label("has geometrical property", "en")?
        .comment("Relates a structural member with its geometrical properties.", "en")?;
    builder
        .object_property("hasSystem")?
        .domain("Structure")?
        .range("StructuralSystem")?
        .label("has system", "en")?
        .comment("Relates a structure with its structural system.", "en")?;
    builder
        .object_property("hasDesignWorkingLife")?
        .domain("Structure")?
        .range("DesignWorkingLife")?
        .label("has design working life", "en")?
        .comment("Relates a structure to its design working life.", "en")?;
    builder
        .object_property("hasStructuralMember")?
        .sub_property_of_iri(BOT_HAS_ELEMENT)
        .domain_iri(BOT_ZONE)
        .range("StructuralMember")?
        .label("has structural member", "en")?
        .comment("Relates a a structural element with the zone.", "en")?;
    builder
        .object_property("containsStructuralMember")?
        .sub_property_of_iri(BOT_HAS_ELEMENT)
        .domain("StructuralSystem")?
        .range("StructuralMember")?
        .label("contains structural member", "en")?
        .comment("Relates a a structural element with the structural syste.", "en")?;
    builder
        .object_property("hasStructure")?
        .sub_property_of_iri(BOT_HAS_ELEMENT)
        .domain("ConstructionWork")?
        .range("Structure")?
        .label("has structure", "en")?
        .comment("Relates a contrution work with the structure.", "en")?;
    Ok(())
}

fn datatype_properties(builder: &mut OntologyBuilder) -> Result<(), BuildError> {
    builder
        .datatype_property("hasCharacteristicValue")?
        .domain("Action")?
        .decimal_range()
        .label("Characteristic Value", "en")?
        .label("Valor Característico", "es")?
        .comment("Principal representative value of an action. In so far as a characteristic value can be fixed on statistical bases, it is chosen so as to correspond to a prescribed probability of not being exceeded on the unfavourable side during a reference period.", "en")?
        .source("UNE-EN 1990:2019, Section 1.5.3.14")
        .alt_label("Fk");
    builder
        .datatype_property("hasDesignValue")?
        .domain("Action")?
        .decimal_range()
        .label("Design Value", "en")?
        .label("Valor de Cálculo", "es")?
        .comment("Value obtained by multiplying the representative value by the partial factor γf.", "en")?
        .source("UNE-EN 1990:2019, Section 1.5.3.21")
        .alt_label("Fd");
    builder
        .datatype_property("hasRepresentativeValue")?
        .domain("Action")?
        .decimal_range()
        .label("Representative Value", "en")?
        .label("Valor Representativo", "es")?
        .comment("Value used for the verification of a limit state. A representative value may be the characteristic value (Fk) or an accompanying value (ψFk).", "en")?
        .source("UNE-EN 1990:2019, Section 1.5.3.20")
        .alt_label("Frep");
    builder
        .datatype_property("PartialFactor")?
        .domain("Action")?
        .decimal_range()
        .label("Partial Factor", "en")?
        .label("Factor Parcial", "es")?
        .comment("Safety factor applied to actions or material properties to account for uncertainties.", "en")?
        .source("UNE-EN 1990:2019, Section 6.3.1")
        .add(skos::EDITORIAL_NOTE, Literal::new_simple_literal("Partial factors account for various sources of uncertainty including statistical uncertainty, model uncertainty, and dimensional variations"));
    builder
        .datatype_property("PermanentActionPartialFactor")?
        .sub_property_of("PartialFactor")?
        .domain("PermanentAction")?
        .decimal_range()
        .label("Permanent Action Partial Factor", "en")?
        .label("Factor Parcial de Acción Permanente", "es")?
        .comment("Partial factor γG applied to permanent actions.", "en")?
        .source("UNE-EN 1990:2019, Section 6.3.1")
        .alt_label("γG");
    builder
        .datatype_property("VariableActionPartialFactor")?
        .sub_property_of("PartialFactor")?
        .domain("VariableAction")?
        .decimal_range()
        .label("Variable Action Partial Factor", "en")?
        .label("Factor Parcial de Acción Variable", "es")?
        .comment("Partial factor γQ applied to variable actions.", "en")?
        .source("UNE-EN 1990:2019, Section 6.3.1")
        .alt_label("γQ");
    builder
        .datatype_property("MaterialPartialFactor")?
        .sub_property_of("PartialFactor")?
        .domain("MaterialProperty")?
        .decimal_range()
        .label("Material Partial Factor", "en")?
        .label("Factor Parcial del Material", "es")?
        .comment("Partial factor γₘ for material properties taking account of the possibility of an unfavourable deviation of a material property from its characteristic value.", "en")?
        .source("UNE-EN 1990:2019, Section 6.3.3")
        .alt_label("γₘ");
    builder
        .datatype_property("MaterialModelPartialFactor")?
        .sub_property_of("PartialFactor")?
        .domain("MaterialProperty")?
        .decimal_range()
        .label("Material-Model Partial Factor", "en")?
        .label("Factor Parcial del Modelo del Material", "es")?
        .comment("Partial factor γₘ for material properties also accounting for model uncertainties and dimensional variations.", "en")?
        .source("UNE-EN 1990:2019, Section 6.3.3")
        .alt_label("γₘ");
    builder
        .datatype_property("CombinationFactor")?
        .domain("VariableAction")?
        .decimal_range()
        .label("Combination Factor", "en")?
        .label("Factor de Combinación", "es")?
        .comment("Factor ψ₀ for combination value of a variable action used in ultimate limit state verifications.", "en")?
        .source("UNE-EN 1990:2019, Section 1.5.3.16")
        .alt_label("ψ₀");
    builder
        .datatype_property("FrequentFactor")?
        .domain("VariableAction")?
        .decimal_range()
        .label("Frequent Factor", "en")?
        .label("Factor Frecuente", "es")?
        .comment("Factor ψ₁ for frequent value of a variable action, determined so that either the total time within the reference period during which it is exceeded is only a small given part of the reference period, or the frequency of it being exceeded is limited to a given value.", "en")?
        .source("UNE-EN 1990:2019, Section 1.5.3.17")
        .alt_label("ψ₁");
    builder
        .datatype_property("QuasiPermanentFactor")?
        .domain("VariableAction")?
        .decimal_range()
        .label("Quasi-Permanent Factor", "en")?
        .label("Factor Cuasi-permanente", "es")?
        .comment("Factor ψ₂ for quasi-permanent value of a variable action, determined so that the total period of time for which it will be exceeded is a large fraction of the reference period.", "en")?
        .source("UNE-EN 1990:2019, Section 1.5.3.18")
        .alt_label("ψ₂");
    Ok(())
}

fn disjointness(builder: &mut OntologyBuilder) -> Result<(), BuildError> {
    builder.disjoint("DirectAction", "IndirectAction")?;
    builder.disjoint("UltimateLimitState", "ServiceabilityLimitState")?;
    builder.disjoint("ReversibleServiceabilityLimitState", "IrreversibleServiceabilityLimitState")?;
    builder.disjoint("FixedAction", "FreeAction")?;
    builder.disjoint("StaticAction", "DynamicAction")?;
    builder.disjoint("PersistentDesignSituation", "TransientDesignSituation")?;
    builder.disjoint("PersistentDesignSituation", "AccidentalDesignSituation")?;
    builder.disjoint("PersistentDesignSituation", "SeismicDesignSituation")?;
    builder.disjoint("TransientDesignSituation", "AccidentalDesignSituation")?;
    builder.disjoint("TransientDesignSituation", "SeismicDesignSituation")?;
    builder.disjoint("AccidentalDesignSituation", "SeismicDesignSituation")?;
    builder.disjoint("ULSCombination", "SLSCombination")?;
    builder.disjoint("LinearDeformation", "AngularDeformation")?;
    builder.disjoint("LinearDeformation", "VolumetricDeformation")?;
    builder.disjoint("AngularDeformation", "VolumetricDeformation")?;
    Ok(())
}

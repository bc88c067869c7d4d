//! Forward-chaining reasoner for a subset of the OWL 2 RL/RDF rules.
//!
//! The rules are applied to the whole graph round after round until no new triple shows up.
//! Consistency is checked once the fixpoint is reached.

use super::{Reasoner, ReasonerError, ReasonerOutput, RlRule};
use crate::vocab::owl;
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Graph, NamedNode, NamedNodeRef, NamedOrBlankNodeRef, TermRef, Triple, TripleRef};
use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, BTreeSet};
use std::iter::once;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const INFERENCE_RULES: &[RlRule] = &[
    RlRule::ScmSco,
    RlRule::ScmEqc1,
    RlRule::ScmSpo,
    RlRule::ScmEqp1,
    RlRule::ScmDom2,
    RlRule::ScmRng2,
    RlRule::CaxSco,
    RlRule::PrpDom,
    RlRule::PrpRng,
    RlRule::PrpSpo1,
    RlRule::PrpInv1,
    RlRule::PrpInv2,
    RlRule::PrpSymp,
    RlRule::PrpTrp,
    RlRule::EqSym,
    RlRule::EqTrans,
    RlRule::EqRepS,
    RlRule::EqRepO,
];

/// Configuration of the [`RlReasoner`].
#[derive(Debug, Clone)]
pub struct RlReasonerConfig {
    /// Maximum number of rule application rounds.
    pub max_iterations: usize,
    /// Maximum time allowed for reasoning (`None` = unlimited).
    pub timeout: Option<Duration>,
    /// Whether to derive property assertions between individuals (sub properties, inverses,
    /// symmetric and transitive properties, `owl:sameAs`) on top of types and schema triples.
    pub infer_property_values: bool,
}

impl Default for RlReasonerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1_000,
            timeout: None,
            infer_property_values: true,
        }
    }
}

/// In-process OWL 2 RL reasoner.
///
/// Supported rules are listed in [`RlRule`]. Class expressions built from restrictions or
/// boolean combinations are not interpreted.
///
/// ```
/// use ontoflow::{Reasoner, ReasonerOutput, RlReasoner};
/// use oxrdf::vocab::{rdf, rdfs};
/// use oxrdf::{Graph, NamedNodeRef, TripleRef};
///
/// let dog = NamedNodeRef::new("http://example.com/Dog")?;
/// let animal = NamedNodeRef::new("http://example.com/Animal")?;
/// let rex = NamedNodeRef::new("http://example.com/rex")?;
///
/// let mut graph = Graph::new();
/// graph.insert(TripleRef::new(dog, rdfs::SUB_CLASS_OF, animal));
/// graph.insert(TripleRef::new(rex, rdf::TYPE, dog));
///
/// let ReasonerOutput::Consistent(entailed) = RlReasoner::new().reason(&graph)? else {
///     unreachable!()
/// };
/// assert!(entailed.contains(TripleRef::new(rex, rdf::TYPE, animal)));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RlReasoner {
    config: RlReasonerConfig,
}

impl RlReasoner {
    /// Creates a reasoner with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reasoner with a custom configuration.
    #[inline]
    pub fn with_config(config: RlReasonerConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &RlReasonerConfig {
        &self.config
    }

    fn enabled_rules(&self) -> impl Iterator<Item = RlRule> + '_ {
        INFERENCE_RULES
            .iter()
            .copied()
            .filter(|rule| self.config.infer_property_values || !rule.infers_property_values())
    }

    fn check_timeout(&self, start: Instant) -> Result<(), ReasonerError> {
        if let Some(timeout) = self.config.timeout {
            if start.elapsed() >= timeout {
                return Err(ReasonerError::Timeout { timeout });
            }
        }
        Ok(())
    }
}

impl Reasoner for RlReasoner {
    fn name(&self) -> &str {
        "owl2-rl"
    }

    fn reason(&self, graph: &Graph) -> Result<ReasonerOutput, ReasonerError> {
        let start = Instant::now();
        let mut closure = graph.clone();
        let mut counts = BTreeMap::<RlRule, usize>::new();
        let mut iterations = 0;
        loop {
            if iterations == self.config.max_iterations {
                return Err(ReasonerError::MaxIterationsExceeded(iterations));
            }
            iterations += 1;
            self.check_timeout(start)?;

            let mut derivations = Derivations::new(&closure);
            for rule in self.enabled_rules() {
                derivations.apply(rule);
            }
            let derived = derivations.derived;

            let mut changed = false;
            for (rule, triple) in derived {
                if closure.insert(&triple) {
                    *counts.entry(rule).or_default() += 1;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        for (rule, count) in &counts {
            debug!(%rule, count, "Rule derivations");
        }
        debug!(
            iterations,
            derived = closure.len() - graph.len(),
            "Reached fixpoint"
        );

        if let Some(unsatisfiable) = check_consistency(&closure) {
            return Ok(ReasonerOutput::Inconsistent(unsatisfiable));
        }
        let unsatisfiable = unsatisfiable_classes(&closure);
        if !unsatisfiable.is_empty() {
            warn!(
                "The ontology is consistent but {} classes are unsatisfiable",
                unsatisfiable.len()
            );
        }
        Ok(ReasonerOutput::Consistent(closure))
    }
}

/// Triples derived during one round, with the rule that produced them.
struct Derivations<'a> {
    graph: &'a Graph,
    derived: Vec<(RlRule, Triple)>,
}

impl<'a> Derivations<'a> {
    fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            derived: Vec::new(),
        }
    }

    fn infer(
        &mut self,
        rule: RlRule,
        subject: NamedOrBlankNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
        object: TermRef<'_>,
    ) {
        if predicate == owl::SAME_AS && TermRef::from(subject) == object {
            return;
        }
        let triple = TripleRef::new(subject, predicate, object);
        if !self.graph.contains(triple) {
            self.derived.push((rule, triple.into_owned()));
        }
    }

    fn apply(&mut self, rule: RlRule) {
        let graph = self.graph;
        match rule {
            RlRule::ScmSco => self.transitive(rule, rdfs::SUB_CLASS_OF, true),
            RlRule::ScmSpo => self.transitive(rule, rdfs::SUB_PROPERTY_OF, true),
            RlRule::ScmEqc1 => self.mutual(rule, owl::EQUIVALENT_CLASS, rdfs::SUB_CLASS_OF),
            RlRule::ScmEqp1 => self.mutual(rule, owl::EQUIVALENT_PROPERTY, rdfs::SUB_PROPERTY_OF),
            RlRule::ScmDom2 => self.inherit_from_super_property(rule, rdfs::DOMAIN),
            RlRule::ScmRng2 => self.inherit_from_super_property(rule, rdfs::RANGE),
            RlRule::CaxSco => {
                for typing in graph.triples_for_predicate(rdf::TYPE) {
                    let Some(class) = as_subject(typing.object) else {
                        continue;
                    };
                    for super_class in graph.objects_for_subject_predicate(class, rdfs::SUB_CLASS_OF)
                    {
                        self.infer(rule, typing.subject, rdf::TYPE, super_class);
                    }
                }
            }
            RlRule::PrpDom => {
                for domain in graph.triples_for_predicate(rdfs::DOMAIN) {
                    let NamedOrBlankNodeRef::NamedNode(property) = domain.subject else {
                        continue;
                    };
                    for assertion in graph.triples_for_predicate(property) {
                        self.infer(rule, assertion.subject, rdf::TYPE, domain.object);
                    }
                }
            }
            RlRule::PrpRng => {
                for range in graph.triples_for_predicate(rdfs::RANGE) {
                    let NamedOrBlankNodeRef::NamedNode(property) = range.subject else {
                        continue;
                    };
                    for assertion in graph.triples_for_predicate(property) {
                        if let Some(target) = as_subject(assertion.object) {
                            self.infer(rule, target, rdf::TYPE, range.object);
                        }
                    }
                }
            }
            RlRule::PrpSpo1 => {
                for axiom in graph.triples_for_predicate(rdfs::SUB_PROPERTY_OF) {
                    let (NamedOrBlankNodeRef::NamedNode(sub), TermRef::NamedNode(sup)) =
                        (axiom.subject, axiom.object)
                    else {
                        continue;
                    };
                    for assertion in graph.triples_for_predicate(sub) {
                        self.infer(rule, assertion.subject, sup, assertion.object);
                    }
                }
            }
            RlRule::PrpInv1 | RlRule::PrpInv2 => {
                for axiom in graph.triples_for_predicate(owl::INVERSE_OF) {
                    let (NamedOrBlankNodeRef::NamedNode(first), TermRef::NamedNode(second)) =
                        (axiom.subject, axiom.object)
                    else {
                        continue;
                    };
                    if rule == RlRule::PrpInv1 {
                        self.invert(rule, first, second);
                    } else {
                        self.invert(rule, second, first);
                    }
                }
            }
            RlRule::PrpSymp => {
                for property in graph.subjects_for_predicate_object(rdf::TYPE, owl::SYMMETRIC_PROPERTY)
                {
                    if let NamedOrBlankNodeRef::NamedNode(property) = property {
                        self.invert(rule, property, property);
                    }
                }
            }
            RlRule::PrpTrp => {
                for property in
                    graph.subjects_for_predicate_object(rdf::TYPE, owl::TRANSITIVE_PROPERTY)
                {
                    if let NamedOrBlankNodeRef::NamedNode(property) = property {
                        self.transitive(rule, property, false);
                    }
                }
            }
            RlRule::EqSym => self.invert(rule, owl::SAME_AS, owl::SAME_AS),
            RlRule::EqTrans => self.transitive(rule, owl::SAME_AS, true),
            RlRule::EqRepS => {
                for same in graph.triples_for_predicate(owl::SAME_AS) {
                    let Some(other) = as_subject(same.object) else {
                        continue;
                    };
                    for triple in graph.triples_for_subject(same.subject) {
                        self.infer(rule, other, triple.predicate, triple.object);
                    }
                }
            }
            RlRule::EqRepO => {
                for same in graph.triples_for_predicate(owl::SAME_AS) {
                    for triple in graph.triples_for_object(TermRef::from(same.subject)) {
                        self.infer(rule, triple.subject, triple.predicate, same.object);
                    }
                }
            }
            RlRule::CaxDw | RlRule::CaxAdc | RlRule::EqDiff1 | RlRule::ClsNothing2 => (),
        }
    }

    /// (x p y), (y p z) → (x p z)
    fn transitive(&mut self, rule: RlRule, property: NamedNodeRef<'_>, skip_reflexive: bool) {
        let graph = self.graph;
        for first in graph.triples_for_predicate(property) {
            let Some(middle) = as_subject(first.object) else {
                continue;
            };
            for end in graph.objects_for_subject_predicate(middle, property) {
                if skip_reflexive && TermRef::from(first.subject) == end {
                    continue;
                }
                self.infer(rule, first.subject, property, end);
            }
        }
    }

    /// (x from y) → (y to x)
    fn invert(&mut self, rule: RlRule, from: NamedNodeRef<'_>, to: NamedNodeRef<'_>) {
        let graph = self.graph;
        for assertion in graph.triples_for_predicate(from) {
            if let Some(target) = as_subject(assertion.object) {
                self.infer(rule, target, to, assertion.subject.into());
            }
        }
    }

    /// (x equivalence y) → (x hierarchy y), (y hierarchy x)
    fn mutual(
        &mut self,
        rule: RlRule,
        equivalence: NamedNodeRef<'_>,
        hierarchy: NamedNodeRef<'_>,
    ) {
        let graph = self.graph;
        for axiom in graph.triples_for_predicate(equivalence) {
            let Some(other) = as_subject(axiom.object) else {
                continue;
            };
            if TermRef::from(axiom.subject) == axiom.object {
                continue;
            }
            self.infer(rule, axiom.subject, hierarchy, axiom.object);
            self.infer(rule, other, hierarchy, axiom.subject.into());
        }
    }

    /// (p2 axiom c), (p1 rdfs:subPropertyOf p2) → (p1 axiom c)
    fn inherit_from_super_property(&mut self, rule: RlRule, axiom: NamedNodeRef<'_>) {
        let graph = self.graph;
        for declaration in graph.triples_for_predicate(axiom) {
            for sub_property in graph
                .subjects_for_predicate_object(rdfs::SUB_PROPERTY_OF, TermRef::from(declaration.subject))
            {
                self.infer(rule, sub_property, axiom, declaration.object);
            }
        }
    }
}

/// Returns the unsatisfiable classes if the graph is inconsistent.
fn check_consistency(graph: &Graph) -> Option<BTreeSet<NamedNode>> {
    let mut inconsistent = false;
    let mut unsatisfiable = BTreeSet::new();

    for axiom in graph.triples_for_predicate(owl::DISJOINT_WITH) {
        let first = TermRef::from(axiom.subject);
        if disjoint_clash(graph, RlRule::CaxDw, first, axiom.object) {
            inconsistent = true;
            insert_named(&mut unsatisfiable, first);
            insert_named(&mut unsatisfiable, axiom.object);
        }
    }

    for declaration in graph.subjects_for_predicate_object(rdf::TYPE, owl::ALL_DISJOINT_CLASSES) {
        let classes = graph
            .objects_for_subject_predicate(declaration, owl::MEMBERS)
            .flat_map(|head| rdf_list(graph, head))
            .collect::<Vec<_>>();
        for (i, first) in classes.iter().enumerate() {
            for second in &classes[i + 1..] {
                if first != second && disjoint_clash(graph, RlRule::CaxAdc, *first, *second) {
                    inconsistent = true;
                    insert_named(&mut unsatisfiable, *first);
                    insert_named(&mut unsatisfiable, *second);
                }
            }
        }
    }

    for individual in graph.subjects_for_predicate_object(rdf::TYPE, owl::NOTHING) {
        debug!(rule = %RlRule::ClsNothing2, "{individual} is an instance of owl:Nothing");
        inconsistent = true;
        let before = unsatisfiable.len();
        for class in graph.objects_for_subject_predicate(individual, rdf::TYPE) {
            let Some(class_node) = as_subject(class) else {
                continue;
            };
            if class != TermRef::from(owl::NOTHING)
                && graph.contains(TripleRef::new(class_node, rdfs::SUB_CLASS_OF, owl::NOTHING))
            {
                insert_named(&mut unsatisfiable, class);
            }
        }
        if unsatisfiable.len() == before {
            unsatisfiable.insert(owl::NOTHING.into_owned());
        }
    }

    for axiom in graph.triples_for_predicate(owl::DIFFERENT_FROM) {
        let Some(other) = as_subject(axiom.object) else {
            continue;
        };
        if graph.contains(TripleRef::new(axiom.subject, owl::SAME_AS, axiom.object))
            || graph.contains(TripleRef::new(other, owl::SAME_AS, axiom.subject))
        {
            debug!(
                rule = %RlRule::EqDiff1,
                "{} is both the same as and different from {}", axiom.subject, axiom.object
            );
            inconsistent = true;
        }
    }

    if !inconsistent {
        return None;
    }
    unsatisfiable.extend(unsatisfiable_classes(graph));
    Some(unsatisfiable)
}

fn disjoint_clash(graph: &Graph, rule: RlRule, first: TermRef<'_>, second: TermRef<'_>) -> bool {
    let mut clash = false;
    for individual in graph.subjects_for_predicate_object(rdf::TYPE, first) {
        if graph.contains(TripleRef::new(individual, rdf::TYPE, second)) {
            debug!(%rule, "{individual} is an instance of the disjoint classes {first} and {second}");
            clash = true;
        }
    }
    clash
}

/// Classes that can't have any instance given the class hierarchy closure.
fn unsatisfiable_classes(graph: &Graph) -> BTreeSet<NamedNode> {
    let mut unsatisfiable = BTreeSet::new();
    for class in graph.subjects_for_predicate_object(rdfs::SUB_CLASS_OF, owl::NOTHING) {
        insert_named(&mut unsatisfiable, class.into());
    }
    for axiom in graph.triples_for_predicate(owl::DISJOINT_WITH) {
        let below_first = graph
            .subjects_for_predicate_object(rdfs::SUB_CLASS_OF, TermRef::from(axiom.subject))
            .chain(once(axiom.subject))
            .collect::<FxHashSet<_>>();
        let below_second = graph
            .subjects_for_predicate_object(rdfs::SUB_CLASS_OF, axiom.object)
            .chain(as_subject(axiom.object));
        for class in below_second {
            if below_first.contains(&class) {
                insert_named(&mut unsatisfiable, class.into());
            }
        }
    }
    unsatisfiable
}

fn insert_named(set: &mut BTreeSet<NamedNode>, term: TermRef<'_>) {
    if let TermRef::NamedNode(node) = term {
        set.insert(node.into_owned());
    }
}

fn as_subject(term: TermRef<'_>) -> Option<NamedOrBlankNodeRef<'_>> {
    if let TermRef::NamedNode(node) = term {
        Some(node.into())
    } else if let TermRef::BlankNode(node) = term {
        Some(node.into())
    } else {
        None
    }
}

/// Elements of the RDF collection starting at `head`. Stops on malformed or cyclic lists.
fn rdf_list<'a>(graph: &'a Graph, head: TermRef<'a>) -> Vec<TermRef<'a>> {
    let mut elements = Vec::new();
    let mut visited = FxHashSet::default();
    let mut current = head;
    while let Some(node) = as_subject(current) {
        if current == TermRef::from(rdf::NIL) || !visited.insert(node) {
            break;
        }
        let Some(first) = graph.object_for_subject_predicate(node, rdf::FIRST) else {
            break;
        };
        elements.push(first);
        let Some(rest) = graph.object_for_subject_predicate(node, rdf::REST) else {
            break;
        };
        current = rest;
    }
    elements
}

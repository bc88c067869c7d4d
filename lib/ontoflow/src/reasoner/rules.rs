//! OWL 2 RL/RDF rules implemented by [`RlReasoner`](super::RlReasoner).

use std::fmt;

/// Identifier of an OWL 2 RL/RDF rule.
///
/// Names follow the tables of the
/// [OWL 2 RL/RDF rules](https://www.w3.org/TR/owl2-profiles/#OWL_2_RL) section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RlRule {
    // Schema
    ScmSco,
    ScmEqc1,
    ScmSpo,
    ScmEqp1,
    ScmDom2,
    ScmRng2,
    // Class axioms
    CaxSco,
    CaxDw,
    CaxAdc,
    // Properties
    PrpDom,
    PrpRng,
    PrpSpo1,
    PrpInv1,
    PrpInv2,
    PrpSymp,
    PrpTrp,
    // Equality
    EqSym,
    EqTrans,
    EqRepS,
    EqRepO,
    EqDiff1,
    // Class expressions
    ClsNothing2,
}

impl RlRule {
    /// The rule name used in the OWL 2 profiles document.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ScmSco => "scm-sco",
            Self::ScmEqc1 => "scm-eqc1",
            Self::ScmSpo => "scm-spo",
            Self::ScmEqp1 => "scm-eqp1",
            Self::ScmDom2 => "scm-dom2",
            Self::ScmRng2 => "scm-rng2",
            Self::CaxSco => "cax-sco",
            Self::CaxDw => "cax-dw",
            Self::CaxAdc => "cax-adc",
            Self::PrpDom => "prp-dom",
            Self::PrpRng => "prp-rng",
            Self::PrpSpo1 => "prp-spo1",
            Self::PrpInv1 => "prp-inv1",
            Self::PrpInv2 => "prp-inv2",
            Self::PrpSymp => "prp-symp",
            Self::PrpTrp => "prp-trp",
            Self::EqSym => "eq-sym",
            Self::EqTrans => "eq-trans",
            Self::EqRepS => "eq-rep-s",
            Self::EqRepO => "eq-rep-o",
            Self::EqDiff1 => "eq-diff1",
            Self::ClsNothing2 => "cls-nothing2",
        }
    }

    /// Returns `true` for rules that derive property assertions between individuals.
    ///
    /// They only run when property value inference is requested.
    pub const fn infers_property_values(self) -> bool {
        matches!(
            self,
            Self::PrpSpo1
                | Self::PrpInv1
                | Self::PrpInv2
                | Self::PrpSymp
                | Self::PrpTrp
                | Self::EqSym
                | Self::EqTrans
                | Self::EqRepS
                | Self::EqRepO
        )
    }
}

impl fmt::Display for RlRule {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

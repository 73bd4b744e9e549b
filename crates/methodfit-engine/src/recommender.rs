//! Candidate filtering pipeline

use crate::rules::RuleSet;
use methodfit_domain::{Answers, Catalog, MethodId, QuestionId};
use std::collections::BTreeSet;

/// Result of one evaluation
///
/// Computed fresh on every call; never cached or persisted. The recommended
/// set is always a subset of the catalog, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// Methods that survived the pipeline
    pub recommended: BTreeSet<MethodId>,

    /// Whether estrogen-containing methods are medically contraindicated
    pub estrogen_contraindicated: bool,
}

impl Recommendation {
    /// Whether a method survived the pipeline
    pub fn is_recommended(&self, id: MethodId) -> bool {
        self.recommended.contains(&id)
    }
}

/// Boolean projections of the snapshot, computed once per evaluation
///
/// An absent answer leaves every fact false and the age unknown; the
/// pipeline never reads the snapshot directly.
#[derive(Debug, Clone, Copy)]
struct Facts {
    estrogen_contraindicated: bool,
    prefers_no_hormones: bool,
    can_do_daily_pill: bool,
    cannot_do_daily_pill: bool,
    high_risk_history: bool,
    recent_high_risk: bool,
    pregnant_soon: bool,
}

impl Facts {
    fn derive(answers: &Answers, rules: &RuleSet) -> Self {
        Self {
            estrogen_contraindicated: rules.estrogen_contraindicated(answers),
            prefers_no_hormones: answers.is_yes(QuestionId::PreferNoHormones),
            can_do_daily_pill: answers.is_yes(QuestionId::DailyPillStrict),
            // An explicit "no" only. An unanswered adherence question is
            // unknown, not an inability, and must exclude nothing.
            cannot_do_daily_pill: answers.is_no(QuestionId::DailyPillStrict),
            high_risk_history: answers.is_yes(rules.hormonal_exclusion_trigger),
            recent_high_risk: answers.is_yes(rules.estrogen_exclusion_trigger),
            pregnant_soon: answers.is_yes(QuestionId::PregnantSoon),
        }
    }
}

/// Runs the ordered rule pipeline over the catalog
///
/// Pure and synchronous: each call is an independent computation over the
/// snapshot argument and the immutable catalog, so a single instance may be
/// shared freely across concurrent evaluations.
pub struct Recommender {
    rules: RuleSet,
}

impl Recommender {
    /// Create a recommender with the given rule table
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Create a recommender with the canonical rule table
    pub fn canonical() -> Self {
        Self::new(RuleSet::canonical())
    }

    /// The active rule table
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Evaluate a snapshot
    ///
    /// Total over its input domain: partial and empty snapshots are valid,
    /// and an empty recommended set is a valid outcome, not an error. The
    /// stage order below is load-bearing.
    pub fn recommend(&self, answers: &Answers) -> Recommendation {
        let facts = Facts::derive(answers, &self.rules);
        tracing::debug!(
            raised = ?self.rules.raised_flags(answers),
            "derived screening facts"
        );

        // 1. Seed with the full catalog.
        let mut candidates = seed();

        // 2. Estrogen safety filter.
        candidates = exclude_estrogen(candidates, &facts);
        tracing::debug!(remaining = candidates.len(), "after estrogen exclusion");

        // 3. Absorbing override: a stated non-hormonal preference discards
        // all other filtering and fixes the result. The one surviving method
        // carries no hormones, so no hormone-related exclusion can apply to
        // it. The contraindication flag is still reported.
        if facts.prefers_no_hormones {
            tracing::debug!("non-hormonal preference set, short-circuiting");
            return Recommendation {
                recommended: BTreeSet::from([MethodId::Diaphragm]),
                estrogen_contraindicated: facts.estrogen_contraindicated,
            };
        }

        // 4. High-risk history removes every hormonal method, a strictly
        // broader cut than stage 2.
        candidates = exclude_hormonal(candidates, &facts);

        // 5. Recency removes estrogen-containing methods. Often redundant
        // with stage 2, but the flag sets differ by rule table, so it runs
        // on its own trigger.
        candidates = exclude_estrogen_for_recency(candidates, &facts);

        // 6. Daily adherence is a precondition for both pills, independent
        // of hormone content.
        candidates = exclude_daily_pills(candidates, &facts);

        // 7. Delayed return to fertility.
        candidates = exclude_delayed_fertility(candidates, &facts);

        // 8. A willing-and-able daily-pill answer outranks every earlier
        // removal of the pills, including the estrogen filter in stage 2.
        candidates = readmit_daily_pills(candidates, &facts);

        tracing::debug!(
            recommended = candidates.len(),
            estrogen_contraindicated = facts.estrogen_contraindicated,
            "pipeline complete"
        );
        Recommendation {
            recommended: candidates,
            estrogen_contraindicated: facts.estrogen_contraindicated,
        }
    }
}

// Pipeline stages. Each consumes and returns a candidate set; composition
// order lives in `recommend` and nowhere else.

/// Stage 1: every method id, in catalog order
fn seed() -> BTreeSet<MethodId> {
    MethodId::ALL.into_iter().collect()
}

/// Stage 2: drop estrogen-containing methods when contraindicated
fn exclude_estrogen(candidates: BTreeSet<MethodId>, facts: &Facts) -> BTreeSet<MethodId> {
    if !facts.estrogen_contraindicated {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|id| !Catalog::get(*id).hormone_profile.contains_estrogen())
        .collect()
}

/// Stage 4: drop every hormonal method on a high-risk history
fn exclude_hormonal(candidates: BTreeSet<MethodId>, facts: &Facts) -> BTreeSet<MethodId> {
    if !facts.high_risk_history {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|id| !Catalog::get(*id).hormone_profile.is_hormonal())
        .collect()
}

/// Stage 5: drop estrogen-containing methods on the recency trigger
fn exclude_estrogen_for_recency(
    candidates: BTreeSet<MethodId>,
    facts: &Facts,
) -> BTreeSet<MethodId> {
    if !facts.recent_high_risk {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|id| !Catalog::get(*id).hormone_profile.contains_estrogen())
        .collect()
}

/// Stage 6: drop both pills when strict daily dosing was ruled out
fn exclude_daily_pills(mut candidates: BTreeSet<MethodId>, facts: &Facts) -> BTreeSet<MethodId> {
    if facts.cannot_do_daily_pill {
        candidates.remove(&MethodId::CombinedPill);
        candidates.remove(&MethodId::ProgestinPill);
    }
    candidates
}

/// Stage 7: drop the injectable when pregnancy is wanted soon
fn exclude_delayed_fertility(
    mut candidates: BTreeSet<MethodId>,
    facts: &Facts,
) -> BTreeSet<MethodId> {
    if facts.pregnant_soon {
        candidates.remove(&MethodId::Shot);
    }
    candidates
}

/// Stage 8: force both pills back for a willing-and-able daily-pill taker
fn readmit_daily_pills(mut candidates: BTreeSet<MethodId>, facts: &Facts) -> BTreeSet<MethodId> {
    if facts.can_do_daily_pill {
        candidates.insert(MethodId::CombinedPill);
        candidates.insert(MethodId::ProgestinPill);
    }
    candidates
}

//! Display ordering for recommendation results

use crate::recommender::Recommendation;
use methodfit_domain::{Catalog, Method};

/// Order the catalog for display: recommended methods first
///
/// A stable partition, not a resort: within each partition methods keep
/// their catalog position, so ties always break the same way.
pub fn display_order(recommendation: &Recommendation) -> Vec<&'static Method> {
    let mut ordered: Vec<&'static Method> = Catalog::iter()
        .filter(|method| recommendation.is_recommended(method.id))
        .collect();
    ordered.extend(Catalog::iter().filter(|method| !recommendation.is_recommended(method.id)));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommender::Recommender;
    use methodfit_domain::{AnswerValue, Answers, MethodId, QuestionId, YesNo};

    fn ids(methods: &[&'static Method]) -> Vec<MethodId> {
        methods.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_full_recommendation_keeps_catalog_order() {
        let recommendation = Recommender::canonical().recommend(&Answers::new());
        let ordered = display_order(&recommendation);
        assert_eq!(ids(&ordered), MethodId::ALL.to_vec());
    }

    #[test]
    fn test_recommended_float_to_the_top_stably() {
        let answers: Answers = [(
            QuestionId::ClottingHistory,
            AnswerValue::YesNo(YesNo::Yes),
        )]
        .into_iter()
        .collect();
        let recommendation = Recommender::canonical().recommend(&answers);
        let ordered = display_order(&recommendation);

        // Recommended partition first, catalog order inside each partition.
        assert_eq!(
            ids(&ordered),
            vec![
                MethodId::ProgestinPill,
                MethodId::Shot,
                MethodId::Diaphragm,
                MethodId::CombinedPill,
                MethodId::Patch,
                MethodId::Nuvaring,
                MethodId::Annovera,
            ]
        );
    }

    #[test]
    fn test_every_method_appears_exactly_once() {
        let answers: Answers = [(
            QuestionId::PreferNoHormones,
            AnswerValue::YesNo(YesNo::Yes),
        )]
        .into_iter()
        .collect();
        let recommendation = Recommender::canonical().recommend(&answers);
        let ordered = display_order(&recommendation);

        let mut seen = ids(&ordered);
        seen.sort();
        assert_eq!(seen, MethodId::ALL.to_vec());
        assert_eq!(ordered[0].id, MethodId::Diaphragm);
    }
}

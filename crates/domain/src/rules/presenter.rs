//! Chat payload for a finished roll

use serde::{Deserialize, Serialize};

use super::outcome::{LegacyCritical, LegacyTier};
use super::plan::{RollOutcome, RollPlan};
use crate::entities::Actor;
use crate::error::RollError;
use crate::value_objects::{ReferenceTables, ResultEntry};
use crate::ActorId;

/// Structured message handed to the chat sink. Rendering is the host's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollMessage {
    pub actor_id: ActorId,
    pub speaker: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// One-line summary, e.g. "Lance Habileté : Succès critique"
    pub flavor: String,
    pub dice: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_die: Option<u8>,
    pub total: i32,
    pub result: ResultEntry,
    /// Ladder text such as "Jet réussi si action : Complexe."
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

fn flavor(label: &str, critical: Option<LegacyCritical>) -> String {
    match critical {
        Some(critical) => format!("Lance {} : {}", label, critical.label()),
        None => format!("Lance {}", label),
    }
}

/// Assemble the message; fails only when the result code has no table entry.
pub fn present(
    actor: &Actor,
    plan: &RollPlan,
    outcome: &RollOutcome,
    tables: &ReferenceTables,
) -> Result<RollMessage, RollError> {
    let result = tables.result(outcome.code.as_str())?.clone();

    Ok(RollMessage {
        actor_id: actor.id,
        speaker: actor.name.clone(),
        title: plan.label.clone(),
        image: actor.img.clone(),
        flavor: flavor(&plan.label, outcome.critical),
        dice: outcome.dice.clone(),
        extra_die: outcome.extra_die,
        total: outcome.total,
        result,
        annotation: outcome.tier.as_ref().map(LegacyTier::annotation),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ActorKind;
    use crate::rules::{plan_roll, RollRequest, RuleRevision};
    use crate::value_objects::AttributeKey;

    fn fixed(faces: Vec<i32>) -> impl FnMut(i32, i32) -> i32 {
        let mut faces = faces.into_iter();
        move |_, _| faces.next().unwrap_or(1)
    }

    fn actor() -> Actor {
        let mut actor = Actor::new("Orin", ActorKind::Character)
            .with_attribute(AttributeKey::Vig, 3)
            .with_attribute(AttributeKey::Int, 3)
            .with_health(8, 8);
        actor.img = Some("icons/orin.png".into());
        actor
    }

    #[test]
    fn message_carries_result_entry_and_ladder() {
        let tables = ReferenceTables::builtin();
        let actor = actor();
        let plan = plan_roll(
            &actor,
            &RollRequest::new(AttributeKey::Int),
            &tables,
            RuleRevision::SuccessCount,
        )
        .unwrap();
        let outcome = plan.execute(&mut fixed(vec![2, 2, 1]));
        let message = present(&actor, &plan, &outcome, &tables).unwrap();

        assert_eq!(message.speaker, "Orin");
        assert_eq!(message.title, "Intellect");
        assert_eq!(message.image.as_deref(), Some("icons/orin.png"));
        assert_eq!(message.flavor, "Lance Intellect");
        assert_eq!(message.dice, vec![2, 2, 1]);
        assert_eq!(message.result.code, "ECHEC_CONSEQ");
        assert_eq!(message.annotation.as_deref(), Some("Jet raté."));
    }

    #[test]
    fn legacy_critical_failure_drops_the_ladder() {
        let tables = ReferenceTables::builtin();
        let actor = actor();
        let plan = plan_roll(
            &actor,
            &RollRequest::new(AttributeKey::Int),
            &tables,
            RuleRevision::LegacyPool,
        )
        .unwrap();
        let outcome = plan.execute(&mut fixed(vec![1, 1, 1]));
        let message = present(&actor, &plan, &outcome, &tables).unwrap();

        assert_eq!(message.flavor, "Lance Intellect : Echec critique");
        assert_eq!(message.result.name, "Échec critique");
        assert_eq!(message.annotation, None);
    }

    #[test]
    fn missing_result_entry_is_reported() {
        let mut tables = ReferenceTables::builtin();
        tables.results.retain(|entry| entry.code != "RES_SIMPLE");
        let actor = actor();
        let plan = plan_roll(
            &actor,
            &RollRequest::new(AttributeKey::Int),
            &tables,
            RuleRevision::SuccessCount,
        )
        .unwrap();
        let outcome = plan.execute(&mut fixed(vec![5, 5, 1]));
        let err = present(&actor, &plan, &outcome, &tables).unwrap_err();
        assert_eq!(err, RollError::UnknownResultCode("RES_SIMPLE".into()));
        assert!(!err.is_user_facing());
    }
}

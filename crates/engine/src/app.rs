//! Application state and composition.

use std::sync::Arc;

use arlenor_domain::{ReferenceTables, RuleRevision};

use crate::entities;
use crate::infrastructure::ports::{ActorRepo, ChatPort, ClockPort, RandomPort};
use crate::use_cases;

/// Main application state.
///
/// Holds the reference tables, entity modules and use cases.
pub struct App {
    pub tables: Arc<ReferenceTables>,
    pub entities: Entities,
    pub use_cases: UseCases,
}

/// Container for all entity modules.
pub struct Entities {
    pub actor: Arc<entities::Actor>,
}

/// Container for all use cases.
pub struct UseCases {
    pub roll: use_cases::RollUseCases,
    pub sheet: Arc<use_cases::ActorSheet>,
}

impl App {
    /// Create a new App with every port injected.
    pub fn with_ports(
        actor_repo: Arc<dyn ActorRepo>,
        chat: Arc<dyn ChatPort>,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
        tables: ReferenceTables,
        revision: RuleRevision,
    ) -> Self {
        let tables = Arc::new(tables);
        let actor = Arc::new(entities::Actor::new(actor_repo));

        let roll_skill = Arc::new(use_cases::RollSkill::new(
            actor.clone(),
            chat,
            random,
            clock,
            tables.clone(),
            revision,
        ));
        let sheet = Arc::new(use_cases::ActorSheet::new(actor.clone(), tables.clone()));

        Self {
            tables,
            entities: Entities { actor },
            use_cases: UseCases {
                roll: use_cases::RollUseCases::new(roll_skill),
                sheet,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arlenor_domain::{Actor, ActorKind, AttributeKey, RollRequest};

    use crate::infrastructure::clock::{ScriptedRandom, SystemClock};
    use crate::infrastructure::ports::{MockActorRepo, MockChatPort};

    #[tokio::test]
    async fn app_wires_the_roll_use_case() {
        let actor = Actor::new("Ysolde", ActorKind::Character)
            .with_attribute(AttributeKey::Vig, 3)
            .with_attribute(AttributeKey::Cha, 2)
            .with_health(8, 8);
        let actor_id = actor.id;

        let mut repo = MockActorRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(actor.clone())));
        let mut chat = MockChatPort::new();
        chat.expect_post().times(1).returning(|_| Ok(()));

        let app = App::with_ports(
            Arc::new(repo),
            Arc::new(chat),
            Arc::new(ScriptedRandom::new([6, 2])),
            Arc::new(SystemClock::new()),
            ReferenceTables::builtin(),
            RuleRevision::SuccessCount,
        );
        assert_eq!(app.use_cases.roll.roll_skill.revision(), RuleRevision::SuccessCount);

        let request = RollRequest::new(AttributeKey::Cha).with_difficulty("TRIVIALE");
        let result = app
            .use_cases
            .roll
            .roll_skill
            .execute(actor_id, &request)
            .await
            .unwrap();
        assert_eq!(result.message.result.code, "RES_CRITIQUE");
        assert_eq!(result.outcome.total, 8);
    }
}

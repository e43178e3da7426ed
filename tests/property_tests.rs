//! Property-based tests for the attempt behaviour.
//!
//! Random action sequences are replayed against random question settings
//! and the invariants of the step history are checked after each action.

use guessit::behaviour::{Decision, GuessItBehaviour, GuessItQuestion, PendingStep, Question};
use guessit::config::{HelpDecrement, QuestionConfig};
use guessit::core::{AttemptHistory, AttemptState, Counter, Response};
use guessit::help::HelpText;
use proptest::prelude::*;

const ANSWER: [&str; 3] = ["C", "A", "T"];

#[derive(Clone, Debug)]
struct Action {
    guess: [&'static str; 3],
    help: bool,
}

impl Action {
    fn pending(&self) -> PendingStep {
        let response = Response::from_fragments(self.guess);
        if self.help {
            PendingStep::help(response)
        } else {
            PendingStep::submit(response)
        }
    }
}

prop_compose! {
    fn arbitrary_action()(
        guess in prop::array::uniform3(prop::sample::select(vec!["C", "A", "T", "O", "G", ""])),
        help in prop::bool::weighted(0.2),
    ) -> Action {
        Action { guess, help }
    }
}

prop_compose! {
    fn arbitrary_config()(
        tries_before_help in 0..5u32,
        wordle in any::<bool>(),
        max_tries in 1..8u32,
        always_refund in any::<bool>(),
    ) -> QuestionConfig {
        let mut builder = QuestionConfig::builder(ANSWER).tries_before_help(tries_before_help);
        if wordle {
            builder = builder.wordle(max_tries);
        }
        if always_refund {
            builder = builder.help_decrement(HelpDecrement::Always);
        }
        builder.build().unwrap()
    }
}

fn try_count(history: &AttemptHistory) -> u32 {
    history.reader().last_counter_value(Counter::Try, 0)
}

proptest! {
    #[test]
    fn resubmitting_last_try_is_discarded(
        config in arbitrary_config(),
        actions in prop::collection::vec(arbitrary_action(), 1..12),
    ) {
        let behaviour = GuessItBehaviour::new(GuessItQuestion::new(config));
        let mut history = AttemptHistory::new();
        for action in &actions {
            history = behaviour.apply(&history, action.pending()).unwrap().1;
        }

        if let Some(last) = history.reader().graded_step() {
            let response = last.response.clone();
            prop_assume!(behaviour.question().is_gradable_response(&response));

            let (decision, after) = behaviour
                .apply(&history, PendingStep::submit(response))
                .unwrap();

            prop_assert_eq!(decision, Decision::Discard);
            prop_assert_eq!(after, history);
        }
    }

    #[test]
    fn submissions_add_exactly_one_try_when_kept(
        config in arbitrary_config(),
        actions in prop::collection::vec(arbitrary_action(), 1..15),
    ) {
        let behaviour = GuessItBehaviour::new(GuessItQuestion::new(config));
        let mut history = AttemptHistory::new();

        for action in &actions {
            let before = try_count(&history);
            let (decision, after) = behaviour.apply(&history, action.pending()).unwrap();
            let now = try_count(&after);

            prop_assert!(now >= before);
            if !action.help {
                match decision {
                    Decision::Keep => prop_assert_eq!(now, before + 1),
                    Decision::Invalid | Decision::Discard => prop_assert_eq!(now, before),
                }
            }
            history = after;
        }
    }

    #[test]
    fn completion_is_monotonic(
        config in arbitrary_config(),
        actions in prop::collection::vec(arbitrary_action(), 1..15),
    ) {
        let behaviour = GuessItBehaviour::new(GuessItQuestion::new(config));
        let mut history = AttemptHistory::new();
        for action in &actions {
            history = behaviour.apply(&history, action.pending()).unwrap().1;
        }

        let steps = history.steps();
        if let Some(first_complete) = steps
            .iter()
            .position(|step| step.is_try() && step.state == AttemptState::Complete)
        {
            for step in &steps[first_complete..] {
                prop_assert_eq!(step.state, AttemptState::Complete);
            }
        }
    }

    #[test]
    fn ceiling_fires_exactly_when_budget_is_spent(
        max_tries in 1..8u32,
        actions in prop::collection::vec(arbitrary_action(), 1..15),
    ) {
        let config = QuestionConfig::builder(ANSWER).wordle(max_tries).build().unwrap();
        let behaviour = GuessItBehaviour::new(GuessItQuestion::new(config));
        let mut history = AttemptHistory::new();

        for action in &actions {
            let prev_count = i64::from(try_count(&history));
            let mut pending = action.pending();
            let decision = behaviour.process_action(&history, &mut pending).unwrap();

            if decision == Decision::Keep {
                let fraction = pending.vars().raw_fraction.unwrap();
                let effective = if action.help && prev_count != 0 { prev_count - 1 } else { prev_count };
                let prev_complete = history
                    .reader()
                    .graded_step()
                    .is_some_and(|step| step.state == AttemptState::Complete);
                let expected = !prev_complete
                    && fraction < 1.0
                    && effective > i64::from(max_tries) - 2;

                prop_assert_eq!(pending.state() == Some(AttemptState::GradedPartial), expected);
                prop_assert_eq!(pending.vars().max_tries_reached, expected);
            }
            if decision.is_kept() {
                history = history.record(pending.into_step());
            }
        }

        let stamped = history
            .steps()
            .iter()
            .filter(|step| step.vars.max_tries_reached)
            .count();
        prop_assert!(stamped <= 1);
    }

    #[test]
    fn hint_needs_threshold_and_help_request(
        config in arbitrary_config(),
        actions in prop::collection::vec(arbitrary_action(), 0..12),
    ) {
        let threshold = config.nb_tries_before_help;
        let behaviour = GuessItBehaviour::new(GuessItQuestion::new(config));
        let mut history = AttemptHistory::new();
        for action in &actions {
            history = behaviour.apply(&history, action.pending()).unwrap().1;
        }

        let prev_tries = try_count(&history);
        let latest_helped = history
            .reader()
            .graded_step()
            .is_some_and(|step| step.vars.help);

        match behaviour.extra_help_if_requested(&history) {
            HelpText::Hint(hint) => {
                prop_assert!(prev_tries >= threshold);
                prop_assert!(latest_helped);
                prop_assert!(!hint.is_empty());
            }
            HelpText::TriesRemaining(n) => {
                prop_assert!(prev_tries < threshold);
                prop_assert_eq!(n, threshold - prev_tries);
            }
            HelpText::None => {
                prop_assert!(prev_tries >= threshold);
                prop_assert!(!latest_helped);
            }
        }
    }

    #[test]
    fn history_roundtrip_serialization(
        actions in prop::collection::vec(arbitrary_action(), 0..8),
    ) {
        let config = QuestionConfig::builder(ANSWER).tries_before_help(2).build().unwrap();
        let behaviour = GuessItBehaviour::new(GuessItQuestion::new(config));
        let mut history = AttemptHistory::new();
        for action in &actions {
            history = behaviour.apply(&history, action.pending()).unwrap().1;
        }

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: AttemptHistory = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(deserialized.len(), history.len());
        prop_assert_eq!(try_count(&deserialized), try_count(&history));
        prop_assert_eq!(
            deserialized.reader().current_state(),
            history.reader().current_state()
        );
    }
}

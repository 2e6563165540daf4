//! Analyze Text use case
//!
//! The council controller. One call analyzes one text, strictly sequentially:
//!
//! ```text
//! INIT → SELECT → (DEBATE → GATE → {STOP | RECRUIT → ADD_AGENT})* → VOTE → SUMMARIZE → DONE
//! ```
//!
//! The loop runs at most `max_rounds` times and also ends when the gate finds
//! the team sufficient, when no candidate is left, or when recruitment yields
//! no valid perspective. Nothing here fails: every collaborator degrades to a
//! documented default, so `analyze` always returns an [`AnalysisResult`].

use crate::agents::AgentRoster;
use crate::config::AnalysisParams;
use crate::ports::progress::{AnalysisProgress, NoProgress};
use crate::ports::summarizer::Summarizer;
use crate::ports::text_generator::TextGenerator;
use crate::ports::web_context::WebContextProvider;
use crate::use_cases::council::{
    DebateEngine, DebateOutcome, Recruiter, ReinforcementGate, TeamSelector,
};
use sarcasm_domain::{
    AnalysisPhase, AnalysisResult, MajorityVoter, Perspective, RoundState,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the AnalyzeText use case
#[derive(Debug, Clone)]
pub struct AnalyzeTextInput {
    pub text: String,
    /// Preceding conversation, if any
    pub utterance_context: Option<String>,
}

impl AnalyzeTextInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            utterance_context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        self.utterance_context = (!context.trim().is_empty()).then_some(context);
        self
    }
}

/// Use case for analyzing one text with the perspective council
pub struct AnalyzeTextUseCase {
    roster: Arc<AgentRoster>,
    selector: TeamSelector,
    debate: DebateEngine,
    gate: ReinforcementGate,
    recruiter: Recruiter,
    voter: MajorityVoter,
    web_context: Arc<dyn WebContextProvider>,
    summarizer: Arc<dyn Summarizer>,
    params: AnalysisParams,
}

impl AnalyzeTextUseCase {
    /// Build a controller with default parameters.
    ///
    /// `meta` answers the selector, gate and recruiter meta-queries; each
    /// perspective uses the generator it was given in the roster.
    pub fn new(
        roster: AgentRoster,
        meta: Arc<dyn TextGenerator>,
        web_context: Arc<dyn WebContextProvider>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        let roster = Arc::new(roster);
        let params = AnalysisParams::default();
        Self {
            debate: DebateEngine::new(Arc::clone(&roster)),
            selector: TeamSelector::new(Arc::clone(&meta)),
            gate: ReinforcementGate::new(Arc::clone(&meta)).with_policy(params.gate_policy),
            recruiter: Recruiter::new(meta),
            voter: MajorityVoter::new(params.vote_threshold),
            roster,
            web_context,
            summarizer,
            params,
        }
    }

    pub fn with_params(mut self, params: AnalysisParams) -> Self {
        self.voter = MajorityVoter::new(params.vote_threshold);
        self.gate = self.gate.with_policy(params.gate_policy);
        self.params = params;
        self
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Analyze with default (no-op) progress
    pub async fn analyze(&self, input: AnalyzeTextInput) -> AnalysisResult {
        self.analyze_with_progress(input, &NoProgress).await
    }

    /// Analyze with progress callbacks
    pub async fn analyze_with_progress(
        &self,
        input: AnalyzeTextInput,
        progress: &dyn AnalysisProgress,
    ) -> AnalysisResult {
        let text = input.text.as_str();
        let utterance = input.utterance_context.as_deref();
        let catalog = self.roster.catalog();

        info!(
            n_initial = self.params.n_initial,
            max_rounds = self.params.max_rounds,
            "Starting analysis"
        );

        // INIT: background knowledge
        progress.on_phase_start(&AnalysisPhase::Context);
        let web_context = self.web_context.search_and_summarize(text).await;
        debug!("Web context: {}", web_context);

        // SELECT
        progress.on_phase_start(&AnalysisPhase::Selection);
        let team = self
            .selector
            .select_initial(text, catalog, self.params.n_initial)
            .await;
        progress.on_team_selected(&team);

        let mut state = RoundState::new();
        for perspective in team {
            self.activate(&mut state, perspective, text, &web_context, utterance, progress)
                .await;
        }

        // DEBATE → GATE → RECRUIT loop
        for round in 1..=self.params.max_rounds {
            state.round_index = round;
            info!(round, max_rounds = self.params.max_rounds, "Round start");

            progress.on_phase_start(&AnalysisPhase::Debate(round));
            if state.active_count() > 1 {
                let outcome = self
                    .debate
                    .run_round(text, state.outputs_mut(), &web_context, utterance)
                    .await;
                if let DebateOutcome::Revised(p) = outcome
                    && let Some(result) = state.outputs().get(p)
                {
                    progress.on_agent_revised(p, result);
                }
            }

            let explanations = state.explanations();

            progress.on_phase_start(&AnalysisPhase::Gate(round));
            let needs_reinforcement = self
                .gate
                .needs_reinforcement(text, &explanations, utterance)
                .await;
            progress.on_gate_decision(round, needs_reinforcement);
            if !needs_reinforcement {
                info!("Team is sufficient, ending loop");
                break;
            }

            let candidates = state.inactive_candidates(catalog);
            if candidates.is_empty() {
                info!("No more agents available, ending loop");
                break;
            }

            progress.on_phase_start(&AnalysisPhase::Recruit(round));
            let recruit = self
                .recruiter
                .select_complementary(state.activated(), &candidates, text, &explanations, utterance)
                .await;

            match recruit {
                Some(p) if candidates.contains(&p) => {
                    info!(agent = %p, "Adding agent");
                    self.activate(&mut state, p, text, &web_context, utterance, progress)
                        .await;
                }
                _ => {
                    info!("No valid agent to add, ending loop");
                    break;
                }
            }
        }

        // VOTE
        progress.on_phase_start(&AnalysisPhase::Vote);
        let rounds_completed = state.round_index;
        let (activated_agents, outputs) = state.into_parts();
        let scored = outputs.scored();
        let vote = self.voter.decide(&scored);
        info!(decision = %vote.decision, "{}", vote.reasoning);

        // SUMMARIZE
        progress.on_phase_start(&AnalysisPhase::Summary);
        let summary = self.summarizer.summarize(&scored, text).await;

        let result = AnalysisResult {
            text: input.text.clone(),
            decision: vote.decision,
            reasoning: vote.reasoning,
            summary,
            outputs: scored,
            activated_agents,
            rounds_completed,
        };
        progress.on_complete(&result);
        result
    }

    /// Run a perspective's first analysis and record it
    async fn activate(
        &self,
        state: &mut RoundState,
        perspective: Perspective,
        text: &str,
        web_context: &str,
        utterance: Option<&str>,
        progress: &dyn AnalysisProgress,
    ) {
        if state.is_active(perspective) {
            return;
        }
        let Some(agent) = self.roster.get(perspective) else {
            debug!(agent = %perspective, "Not in roster, skipping");
            return;
        };
        let result = agent.analyze(text, Some(web_context), utterance).await;
        progress.on_agent_activated(perspective, &result);
        state.activate(perspective, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::web_context::NoWebContext;
    use crate::testing::{
        ANALYSIS, CountingSummarizer, DEBATE, FixedWebContext, GATE, RECRUIT, RoutedGenerator,
        SELECTION, ScriptedGenerator,
    };
    use sarcasm_domain::{AgentCatalog, AgentResult, Verdict};
    use std::sync::Mutex;

    const SUFFICIENT: &str = r#"{"decision": "No"}"#;
    const INSUFFICIENT: &str = r#"{"decision": "Yes"}"#;

    fn analysis(strength: f64) -> String {
        format!(
            r#"{{"PERSPECTIVE STRENGTH": {}, "EXPLANATION": "score {}"}}"#,
            strength, strength
        )
    }

    fn controller(generator: Arc<RoutedGenerator>) -> AnalyzeTextUseCase {
        let roster = AgentRoster::uniform(AgentCatalog::default(), generator.clone());
        AnalyzeTextUseCase::new(
            roster,
            generator,
            Arc::new(NoWebContext),
            Arc::new(CountingSummarizer),
        )
    }

    // ==================== Progress Recorder ====================

    #[derive(Default)]
    struct RecordingProgress {
        phases: Mutex<Vec<AnalysisPhase>>,
        activated: Mutex<Vec<Perspective>>,
        gate: Mutex<Vec<(usize, bool)>>,
    }

    impl AnalysisProgress for RecordingProgress {
        fn on_phase_start(&self, phase: &AnalysisPhase) {
            self.phases.lock().unwrap().push(*phase);
        }
        fn on_complete(&self, _result: &AnalysisResult) {}
        fn on_agent_activated(&self, perspective: Perspective, _result: &AgentResult) {
            self.activated.lock().unwrap().push(perspective);
        }
        fn on_gate_decision(&self, round: usize, needs: bool) {
            self.gate.lock().unwrap().push((round, needs));
        }
    }

    // ==================== Termination ====================

    #[tokio::test]
    async fn test_one_round_when_gate_is_satisfied() {
        let a = analysis(0.8);
        let generator = Arc::new(
            RoutedGenerator::new()
                .route(SELECTION, vec!["RhetoricalDeviceAgent,PersonaConflictAgent,SemanticIncongruityAgent"])
                .route(DEBATE, vec!["not json"])
                .route(GATE, vec![SUFFICIENT])
                .route(ANALYSIS, vec![&a]),
        );

        let result = controller(generator.clone())
            .analyze(AnalyzeTextInput::new("What a lovely flat tyre."))
            .await;

        assert_eq!(result.rounds_completed, 1);
        assert_eq!(
            result.activated_agents,
            vec![
                Perspective::RhetoricalDevice,
                Perspective::PersonaConflict,
                Perspective::SemanticIncongruity
            ]
        );
        assert_eq!(result.decision, Verdict::Sarcastic);
        assert_eq!(
            result.reasoning,
            "Rule-based decision: SARCASTIC votes (3) vs. NOT SARCASTIC votes (0)."
        );
        assert_eq!(result.summary, "3 outputs");
        assert!(generator.prompts_matching(RECRUIT).is_empty());
        assert_eq!(generator.prompts_matching(GATE).len(), 1);
    }

    #[tokio::test]
    async fn test_grows_one_agent_per_round() {
        let a = analysis(0.2);
        let generator = Arc::new(
            RoutedGenerator::new()
                .route(SELECTION, vec!["RhetoricalDeviceAgent,PersonaConflictAgent"])
                .route(DEBATE, vec!["ERROR"])
                .route(GATE, vec![INSUFFICIENT])
                .route(
                    RECRUIT,
                    vec!["SemanticIncongruityAgent", "CommonSenseViolationAgent", "PragmaticContrastAgent"],
                )
                .route(ANALYSIS, vec![&a]),
        );
        let progress = RecordingProgress::default();

        let result = controller(generator.clone())
            .with_params(AnalysisParams::default().with_n_initial(2).with_max_rounds(3))
            .analyze_with_progress(AnalyzeTextInput::new("t"), &progress)
            .await;

        assert_eq!(result.rounds_completed, 3);
        assert_eq!(
            result.activated_agents,
            vec![
                Perspective::RhetoricalDevice,
                Perspective::PersonaConflict,
                Perspective::SemanticIncongruity,
                Perspective::CommonSenseViolation,
                Perspective::PragmaticContrast,
            ]
        );
        assert_eq!(result.decision, Verdict::NotSarcastic);
        assert_eq!(*progress.activated.lock().unwrap(), result.activated_agents);
        assert_eq!(
            *progress.gate.lock().unwrap(),
            vec![(1, true), (2, true), (3, true)]
        );
    }

    #[tokio::test]
    async fn test_stops_early_when_catalog_is_exhausted() {
        let a = analysis(0.7);
        let generator = Arc::new(
            RoutedGenerator::new()
                .route(SELECTION, vec!["PersonaConflictAgent,RhetoricalDeviceAgent"])
                .route(DEBATE, vec![""])
                .route(GATE, vec![INSUFFICIENT])
                .route(RECRUIT, vec!["SemanticIncongruityAgent"])
                .route(ANALYSIS, vec![&a]),
        );
        let catalog = AgentCatalog::from_perspectives([
            Perspective::PersonaConflict,
            Perspective::RhetoricalDevice,
            Perspective::SemanticIncongruity,
        ])
        .unwrap();
        let roster = AgentRoster::uniform(catalog, generator.clone());
        let controller = AnalyzeTextUseCase::new(
            roster,
            generator.clone(),
            Arc::new(NoWebContext),
            Arc::new(CountingSummarizer),
        )
        .with_params(AnalysisParams::default().with_n_initial(2).with_max_rounds(5));

        let result = controller.analyze(AnalyzeTextInput::new("t")).await;

        // Round 1 recruits the last candidate, round 2 finds the pool empty.
        assert_eq!(result.rounds_completed, 2);
        assert_eq!(result.activated_agents.len(), 3);
        assert_eq!(generator.prompts_matching(RECRUIT).len(), 1);
        assert_eq!(generator.prompts_matching(GATE).len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_recruit_ends_loop() {
        let a = analysis(0.6);
        let generator = Arc::new(
            RoutedGenerator::new()
                .route(SELECTION, vec!["PersonaConflictAgent,RhetoricalDeviceAgent,PragmaticContrastAgent"])
                .route(DEBATE, vec![""])
                .route(GATE, vec![INSUFFICIENT])
                .route(RECRUIT, vec!["None"])
                .route(ANALYSIS, vec![&a]),
        );

        let result = controller(generator).analyze(AnalyzeTextInput::new("t")).await;

        assert_eq!(result.rounds_completed, 1);
        assert_eq!(result.activated_agents.len(), 3);
    }

    #[tokio::test]
    async fn test_zero_rounds_skips_loop() {
        let a = analysis(0.9);
        let generator = Arc::new(
            RoutedGenerator::new()
                .route(SELECTION, vec!["PersonaConflictAgent"])
                .route(ANALYSIS, vec![&a]),
        );

        let result = controller(generator.clone())
            .with_params(AnalysisParams::default().with_n_initial(1).with_max_rounds(0))
            .analyze(AnalyzeTextInput::new("t"))
            .await;

        assert_eq!(result.rounds_completed, 0);
        assert_eq!(result.decision, Verdict::Sarcastic);
        assert!(generator.prompts_matching(GATE).is_empty());
    }

    // ==================== Debate ====================

    #[tokio::test]
    async fn test_debate_revision_feeds_the_vote() {
        let generator = Arc::new(
            RoutedGenerator::new()
                .route(SELECTION, vec!["RhetoricalDeviceAgent,PersonaConflictAgent"])
                .route(
                    DEBATE,
                    vec![r#"{"PERSPECTIVE STRENGTH": 0.9, "EXPLANATION": "Revised upward."}"#],
                )
                .route(GATE, vec![SUFFICIENT])
                .route(ANALYSIS, vec![&analysis(0.9), &analysis(0.5)]),
        );

        let result = controller(generator)
            .with_params(AnalysisParams::default().with_n_initial(2))
            .analyze(AnalyzeTextInput::new("t"))
            .await;

        assert_eq!(
            result.outputs.get(Perspective::PersonaConflict).unwrap().explanation,
            "Revised upward."
        );
        assert_eq!(result.decision, Verdict::Sarcastic);
    }

    #[tokio::test]
    async fn test_unscored_revision_is_excluded_from_outputs() {
        let generator = Arc::new(
            RoutedGenerator::new()
                .route(SELECTION, vec!["RhetoricalDeviceAgent,PersonaConflictAgent"])
                .route(DEBATE, vec![r#"{"EXPLANATION": "Unsure now."}"#])
                .route(GATE, vec![SUFFICIENT])
                .route(ANALYSIS, vec![&analysis(0.9), &analysis(0.5)]),
        );

        let result = controller(generator)
            .with_params(AnalysisParams::default().with_n_initial(2))
            .analyze(AnalyzeTextInput::new("t"))
            .await;

        assert_eq!(result.activated_agents.len(), 2);
        assert_eq!(result.outputs.len(), 1);
        assert!(!result.outputs.contains(Perspective::PersonaConflict));
        assert_eq!(result.summary, "1 outputs");
    }

    // ==================== Degradation ====================

    #[tokio::test]
    async fn test_transport_failure_everywhere_degrades_to_literal() {
        let generator = Arc::new(ScriptedGenerator::failing());
        let roster = AgentRoster::uniform(AgentCatalog::default(), generator.clone());
        let controller = AnalyzeTextUseCase::new(
            roster,
            generator,
            Arc::new(NoWebContext),
            Arc::new(CountingSummarizer),
        );

        let result = controller.analyze(AnalyzeTextInput::new("t")).await;

        assert_eq!(result.activated_agents.len(), 3);
        assert_eq!(result.rounds_completed, 1);
        assert_eq!(result.decision, Verdict::NotSarcastic);
        for (_, r) in result.outputs.iter() {
            assert_eq!(r.strength, Some(0.0));
            assert!(r.is_parse_failure());
        }
    }

    // ==================== Context ====================

    #[tokio::test]
    async fn test_contexts_reach_prompts() {
        let a = analysis(0.1);
        let generator = Arc::new(
            RoutedGenerator::new()
                .route(SELECTION, vec!["PersonaConflictAgent"])
                .route(GATE, vec![SUFFICIENT])
                .route(ANALYSIS, vec![&a]),
        );
        let roster = AgentRoster::uniform(AgentCatalog::default(), generator.clone());
        let controller = AnalyzeTextUseCase::new(
            roster,
            generator.clone(),
            Arc::new(FixedWebContext("The ferry was cancelled for the third time.")),
            Arc::new(CountingSummarizer),
        )
        .with_params(AnalysisParams::default().with_n_initial(1));
        let progress = RecordingProgress::default();

        controller
            .analyze_with_progress(
                AnalyzeTextInput::new("Fantastic service as always.").with_context("A: Any news?"),
                &progress,
            )
            .await;

        let prompts = generator.prompts_matching(ANALYSIS);
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("The ferry was cancelled for the third time."));
        assert!(prompts[0].contains("A: Any news?"));
        assert_eq!(
            *progress.phases.lock().unwrap(),
            vec![
                AnalysisPhase::Context,
                AnalysisPhase::Selection,
                AnalysisPhase::Debate(1),
                AnalysisPhase::Gate(1),
                AnalysisPhase::Vote,
                AnalysisPhase::Summary,
            ]
        );
    }

    #[test]
    fn test_blank_context_is_dropped() {
        assert_eq!(AnalyzeTextInput::new("t").with_context("  ").utterance_context, None);
    }
}

//! Interview session state machine.
//!
//! ```text
//! NotStarted ──start──▶ InProgress ──submit / timeout──▶ Submitting ──2s──▶ Reviewing
//!                          ▲                                                   │
//!                          └──────────── next question (more left) ────────────┤
//!                                                                              ▼
//!                                                                          Completed
//! ```
//!
//! All timing goes through a [`Scheduler`]: the countdown is a one-second timer
//! that reschedules itself, and the simulated analysis is a single two-second
//! timer. Nothing here reads the wall clock.

use super::audio::AudioCapture;
use super::questions::{Question, sample_questions};
use crate::analysis::{Feedback, analyze_answer};
use crate::clock::{Scheduler, TimerId};
use crate::consts::cli_consts::interview::{
    QUESTION_TIME_SECS, VOICE_INPUT_MARKER, analysis_delay, tick_interval,
};
use crate::error::ValidationError;
use crate::notifications::Toasts;
use log::{debug, info, warn};
use rand::Rng;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum SessionPhase {
    /// Waiting for a role selection and a start request.
    NotStarted,
    /// A question is on screen and the countdown is running.
    InProgress,
    /// The answer is being analyzed; resubmission is disabled.
    Submitting,
    /// Feedback for the current question is displayed.
    Reviewing,
    /// The last question was reviewed.
    Completed,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SessionTimer {
    Tick,
    AnalysisDone,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SubmitTrigger {
    Manual,
    Timeout,
}

pub struct InterviewSession {
    questions: Vec<Question>,
    selected_role: Option<String>,
    phase: SessionPhase,
    current_index: usize,
    answer: String,
    time_remaining: u32,
    feedback: Option<Feedback>,
    recording: bool,
    microphone: Box<dyn AudioCapture>,
    scheduler: Scheduler<SessionTimer>,
    tick_timer: Option<TimerId>,
    /// Answer text captured when the submission started.
    submitted_answer: String,
    timeout_submissions: u32,
}

impl fmt::Debug for InterviewSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterviewSession")
            .field("selected_role", &self.selected_role)
            .field("phase", &self.phase)
            .field("current_index", &self.current_index)
            .field("time_remaining", &self.time_remaining)
            .field("recording", &self.recording)
            .finish_non_exhaustive()
    }
}

impl InterviewSession {
    pub fn new(microphone: Box<dyn AudioCapture>) -> Self {
        Self {
            questions: sample_questions(),
            selected_role: None,
            phase: SessionPhase::NotStarted,
            current_index: 0,
            answer: String::new(),
            time_remaining: QUESTION_TIME_SECS,
            feedback: None,
            recording: false,
            microphone,
            scheduler: Scheduler::new(),
            tick_timer: None,
            submitted_answer: String::new(),
            timeout_submissions: 0,
        }
    }

    // Accessors

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn selected_role(&self) -> Option<&str> {
        self.selected_role.as_deref()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    /// One-based position of the current question.
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn has_more_questions(&self) -> bool {
        self.current_index + 1 < self.questions.len()
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn is_processing(&self) -> bool {
        self.phase == SessionPhase::Submitting
    }

    /// True while a question, its analysis or its feedback is on screen.
    pub fn is_active(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::InProgress | SessionPhase::Submitting | SessionPhase::Reviewing
        )
    }

    /// Number of submissions forced by the countdown reaching zero.
    pub fn timeout_submissions(&self) -> u32 {
        self.timeout_submissions
    }

    /// Share of the question's time budget already used, in percent.
    pub fn elapsed_percent(&self) -> u16 {
        let used = QUESTION_TIME_SECS.saturating_sub(self.time_remaining);
        (used * 100 / QUESTION_TIME_SECS) as u16
    }

    // Role selection and start

    pub fn select_role(&mut self, role: &str) {
        if self.is_active() {
            debug!("Ignoring role change during an active session");
            return;
        }
        self.selected_role = Some(role.to_string());
    }

    /// Starts the session at the first question.
    pub fn start(&mut self, toasts: &mut Toasts) -> Result<(), ValidationError> {
        if self.is_active() {
            return Err(ValidationError::Busy);
        }
        let Some(role) = self
            .selected_role
            .as_deref()
            .filter(|r| !r.trim().is_empty())
        else {
            toasts.error(ValidationError::MissingRole.to_string());
            return Err(ValidationError::MissingRole);
        };

        info!("Starting {} interview", role);
        self.current_index = 0;
        self.reset_question_state();
        self.phase = SessionPhase::InProgress;
        self.start_countdown();
        toasts.success("Interview started! Good luck!");
        Ok(())
    }

    // Answer editing

    #[cfg(test)]
    pub fn set_answer(&mut self, text: impl Into<String>) {
        if self.phase == SessionPhase::InProgress {
            self.answer = text.into();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.phase == SessionPhase::InProgress {
            self.answer.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.phase == SessionPhase::InProgress {
            self.answer.pop();
        }
    }

    /// Starts or stops the voice side channel.
    pub fn toggle_recording(&mut self, toasts: &mut Toasts) {
        if self.phase != SessionPhase::InProgress {
            return;
        }
        if self.recording {
            self.stop_recording(toasts);
        } else {
            match self.microphone.start() {
                Ok(()) => {
                    self.recording = true;
                    toasts.success("Recording started");
                }
                Err(e) => {
                    warn!("Could not start recording: {}", e);
                    toasts.error(e.to_string());
                }
            }
        }
    }

    fn stop_recording(&mut self, toasts: &mut Toasts) {
        if let Err(e) = self.microphone.stop() {
            warn!("Microphone stop failed: {}", e);
        }
        self.recording = false;
        self.answer.push_str(VOICE_INPUT_MARKER);
        toasts.success("Recording stopped");
    }

    // Submission

    /// Submits the answer on the user's request. Blank answers are rejected.
    pub fn submit(&mut self, toasts: &mut Toasts) -> Result<(), ValidationError> {
        if self.phase != SessionPhase::InProgress {
            debug!("Submit ignored in phase {}", self.phase);
            return Err(ValidationError::Busy);
        }
        if self.answer.trim().is_empty() && !self.recording {
            toasts.error(ValidationError::EmptyAnswer.to_string());
            return Err(ValidationError::EmptyAnswer);
        }
        self.begin_submission(SubmitTrigger::Manual, toasts);
        Ok(())
    }

    fn begin_submission(&mut self, trigger: SubmitTrigger, toasts: &mut Toasts) {
        if self.recording {
            self.stop_recording(toasts);
        }
        if let Some(id) = self.tick_timer.take() {
            self.scheduler.cancel(id);
        }
        info!(
            "Submitting answer to question {} ({:?})",
            self.question_number(),
            trigger
        );
        self.submitted_answer = self.answer.clone();
        self.phase = SessionPhase::Submitting;
        self.scheduler
            .schedule(analysis_delay(), SessionTimer::AnalysisDone);
    }

    /// Advances the logical clock by `dt`, running countdown ticks and
    /// finishing the analysis when due.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: Duration, rng: &mut R, toasts: &mut Toasts) {
        let mut remaining = dt;
        loop {
            let (step, fired) = self.scheduler.advance_step(remaining);
            remaining -= step;
            let idle = fired.is_empty();
            for timer in fired {
                self.on_timer(timer, rng, toasts);
            }
            if remaining.is_zero() && idle {
                break;
            }
        }
    }

    fn on_timer<R: Rng + ?Sized>(&mut self, timer: SessionTimer, rng: &mut R, toasts: &mut Toasts) {
        match timer {
            SessionTimer::Tick => {
                self.tick_timer = None;
                if self.phase != SessionPhase::InProgress {
                    return;
                }
                self.time_remaining = self.time_remaining.saturating_sub(1);
                if self.time_remaining == 0 {
                    // Timeout submission skips the blank-answer check on purpose
                    info!("Time is up for question {}", self.question_number());
                    self.timeout_submissions += 1;
                    self.begin_submission(SubmitTrigger::Timeout, toasts);
                } else {
                    let id = self.scheduler.schedule(tick_interval(), SessionTimer::Tick);
                    self.tick_timer = Some(id);
                }
            }
            SessionTimer::AnalysisDone => {
                if self.phase != SessionPhase::Submitting {
                    return;
                }
                let feedback = analyze_answer(&self.submitted_answer, self.current_question(), rng);
                info!(
                    "Question {} scored {} ({})",
                    self.question_number(),
                    feedback.score,
                    feedback.sentiment
                );
                self.feedback = Some(feedback);
                self.phase = SessionPhase::Reviewing;
                toasts.success("Answer analyzed successfully!");
            }
        }
    }

    // Review

    /// Moves to the next question, or completes the session after the last one.
    pub fn next_question(&mut self, toasts: &mut Toasts) {
        if self.phase != SessionPhase::Reviewing {
            return;
        }
        if self.has_more_questions() {
            self.current_index += 1;
            self.reset_question_state();
            self.phase = SessionPhase::InProgress;
            self.start_countdown();
        } else {
            info!("Interview completed");
            self.reset_question_state();
            self.phase = SessionPhase::Completed;
            toasts.success("Interview completed! Great job!");
        }
    }

    fn reset_question_state(&mut self) {
        self.answer.clear();
        self.submitted_answer.clear();
        self.feedback = None;
        self.time_remaining = QUESTION_TIME_SECS;
    }

    fn start_countdown(&mut self) {
        self.scheduler.cancel_all();
        self.tick_timer = Some(self.scheduler.schedule(tick_interval(), SessionTimer::Tick));
    }
}

/// Formats seconds as `m:ss`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::audio::{AudioError, MockAudioCapture, SimulatedMicrophone};
    use crate::notifications::NotificationKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SECOND: Duration = Duration::from_secs(1);

    fn session() -> (InterviewSession, Toasts, StdRng) {
        (
            InterviewSession::new(Box::new(SimulatedMicrophone::new())),
            Toasts::new(),
            StdRng::seed_from_u64(11),
        )
    }

    fn started() -> (InterviewSession, Toasts, StdRng) {
        let (mut s, mut toasts, rng) = session();
        s.select_role("Software Engineer");
        s.start(&mut toasts).unwrap();
        (s, toasts, rng)
    }

    #[test]
    // Starting without a role never transitions and always notifies.
    fn test_start_requires_role() {
        let (mut s, mut toasts, _) = session();
        for _ in 0..3 {
            assert_eq!(s.start(&mut toasts), Err(ValidationError::MissingRole));
            assert_eq!(s.phase(), SessionPhase::NotStarted);
            let last = toasts.last().unwrap();
            assert_eq!(last.kind, NotificationKind::Error);
            assert_eq!(last.msg, "Please select a job role first");
        }
        assert_eq!(toasts.len(), 3);
    }

    #[test]
    fn test_start_enters_first_question() {
        let (s, toasts, _) = started();
        assert_eq!(s.phase(), SessionPhase::InProgress);
        assert_eq!(s.question_number(), 1);
        assert_eq!(s.time_remaining(), 180);
        assert_eq!(toasts.last().unwrap().msg, "Interview started! Good luck!");
    }

    #[test]
    // The countdown hits zero after 180 ticks and auto-submits exactly once,
    // even though the answer is empty.
    fn test_countdown_auto_submits_once() {
        let (mut s, mut toasts, mut rng) = started();

        for _ in 0..179 {
            s.advance(SECOND, &mut rng, &mut toasts);
        }
        assert_eq!(s.time_remaining(), 1);
        assert_eq!(s.phase(), SessionPhase::InProgress);

        s.advance(SECOND, &mut rng, &mut toasts);
        assert_eq!(s.time_remaining(), 0);
        assert_eq!(s.phase(), SessionPhase::Submitting);
        assert_eq!(s.timeout_submissions(), 1);

        s.advance(Duration::from_secs(600), &mut rng, &mut toasts);
        assert_eq!(s.phase(), SessionPhase::Reviewing);
        assert_eq!(s.timeout_submissions(), 1);
        assert!(s.feedback().is_some());
    }

    #[test]
    // A single large clock jump still counts every second.
    fn test_countdown_survives_clock_jump() {
        let (mut s, mut toasts, mut rng) = started();
        s.advance(Duration::from_millis(42_500), &mut rng, &mut toasts);
        assert_eq!(s.time_remaining(), 180 - 42);

        s.advance(Duration::from_secs(200), &mut rng, &mut toasts);
        assert_eq!(s.timeout_submissions(), 1);
        assert_eq!(s.phase(), SessionPhase::Reviewing);
    }

    #[test]
    fn test_manual_submit_rejects_blank_answer() {
        let (mut s, mut toasts, _) = started();
        s.set_answer("   \n\t ");
        assert_eq!(s.submit(&mut toasts), Err(ValidationError::EmptyAnswer));
        assert_eq!(s.phase(), SessionPhase::InProgress);
        assert_eq!(toasts.last().unwrap().msg, "Please provide an answer");
    }

    #[test]
    fn test_submit_analyzes_after_fixed_delay() {
        let (mut s, mut toasts, mut rng) = started();
        s.set_answer("REST exposes resources while GraphQL lets clients pick fields");
        s.submit(&mut toasts).unwrap();
        assert!(s.is_processing());

        // The countdown is frozen while submitting
        s.advance(Duration::from_millis(1999), &mut rng, &mut toasts);
        assert_eq!(s.phase(), SessionPhase::Submitting);
        assert_eq!(s.time_remaining(), 180);
        assert_eq!(s.submit(&mut toasts), Err(ValidationError::Busy));

        s.advance(Duration::from_millis(1), &mut rng, &mut toasts);
        assert_eq!(s.phase(), SessionPhase::Reviewing);
        let score = s.feedback().unwrap().score;
        assert!((40..=90).contains(&score));
        assert_eq!(toasts.last().unwrap().msg, "Answer analyzed successfully!");
    }

    #[test]
    fn test_edits_after_submit_do_not_change_scored_answer() {
        let (mut s, mut toasts, mut rng) = started();
        s.set_answer("short");
        s.submit(&mut toasts).unwrap();
        s.set_answer("much longer text that would score higher if it were used");
        assert_eq!(s.answer(), "short");
        s.advance(analysis_delay(), &mut rng, &mut toasts);
        assert_eq!(s.feedback().unwrap().keywords, vec!["Missing key concepts"]);
    }

    #[test]
    // Advancing before the last question resets answer, feedback and timer.
    fn test_next_question_resets_state() {
        let (mut s, mut toasts, mut rng) = started();
        s.set_answer("An answer");
        s.advance(Duration::from_secs(30), &mut rng, &mut toasts);
        s.submit(&mut toasts).unwrap();
        s.advance(analysis_delay(), &mut rng, &mut toasts);

        s.next_question(&mut toasts);
        assert_eq!(s.phase(), SessionPhase::InProgress);
        assert_eq!(s.question_number(), 2);
        assert_eq!(s.answer(), "");
        assert!(s.feedback().is_none());
        assert_eq!(s.time_remaining(), 180);

        s.advance(SECOND, &mut rng, &mut toasts);
        assert_eq!(s.time_remaining(), 179);
    }

    #[test]
    // Advancing past the final question completes the session.
    fn test_last_question_completes_session() {
        let (mut s, mut toasts, mut rng) = started();
        for expected in 1..=3 {
            assert_eq!(s.question_number(), expected);
            s.set_answer("Some thoughtful answer");
            s.submit(&mut toasts).unwrap();
            s.advance(analysis_delay(), &mut rng, &mut toasts);
            s.next_question(&mut toasts);
        }
        assert_eq!(s.phase(), SessionPhase::Completed);
        assert!(!s.is_active());
        assert_eq!(toasts.last().unwrap().msg, "Interview completed! Great job!");

        // No countdown keeps running after completion
        s.advance(Duration::from_secs(500), &mut rng, &mut toasts);
        assert_eq!(s.phase(), SessionPhase::Completed);
        assert_eq!(s.timeout_submissions(), 0);

        // A new run starts from the first question
        s.start(&mut toasts).unwrap();
        assert_eq!(s.question_number(), 1);
    }

    #[test]
    fn test_recording_appends_marker() {
        let (mut s, mut toasts, _) = started();
        s.set_answer("Typed part.");
        s.toggle_recording(&mut toasts);
        assert!(s.is_recording());
        s.toggle_recording(&mut toasts);
        assert!(!s.is_recording());
        assert_eq!(s.answer(), "Typed part. [Voice input captured]");
        assert_eq!(toasts.last().unwrap().msg, "Recording stopped");
    }

    #[test]
    fn test_permission_denied_leaves_recording_unset() {
        let mut mic = MockAudioCapture::new();
        mic.expect_start()
            .times(1)
            .returning(|| Err(AudioError::PermissionDenied));
        mic.expect_stop().never();

        let mut s = InterviewSession::new(Box::new(mic));
        let mut toasts = Toasts::new();
        s.select_role("UX Designer");
        s.start(&mut toasts).unwrap();

        s.toggle_recording(&mut toasts);
        assert!(!s.is_recording());
        assert_eq!(s.answer(), "");
        assert_eq!(toasts.last().unwrap().msg, "Microphone access denied");
    }

    #[test]
    // Submitting mid-recording releases the microphone before analysis.
    fn test_submit_while_recording_releases_stream() {
        let mut mic = MockAudioCapture::new();
        mic.expect_start().times(1).returning(|| Ok(()));
        mic.expect_stop().times(1).returning(|| Ok(()));

        let mut s = InterviewSession::new(Box::new(mic));
        let mut toasts = Toasts::new();
        let mut rng = StdRng::seed_from_u64(5);
        s.select_role("Data Scientist");
        s.start(&mut toasts).unwrap();
        s.toggle_recording(&mut toasts);

        s.submit(&mut toasts).unwrap();
        assert!(!s.is_recording());
        s.advance(analysis_delay(), &mut rng, &mut toasts);
        assert_eq!(s.phase(), SessionPhase::Reviewing);
    }

    #[test]
    fn test_role_locked_during_session() {
        let (mut s, _, _) = started();
        s.select_role("Sales Manager");
        assert_eq!(s.selected_role(), Some("Software Engineer"));
    }

    #[test]
    fn test_time_helpers() {
        assert_eq!(format_time(180), "3:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(9), "0:09");

        let (mut s, mut toasts, mut rng) = started();
        assert_eq!(s.elapsed_percent(), 0);
        s.advance(Duration::from_secs(90), &mut rng, &mut toasts);
        assert_eq!(s.elapsed_percent(), 50);
    }
}

pub mod cli_consts {
    //! Application Constants
    //!
    //! Timings, limits and fixed strings shared by the screens and the headless
    //! commands, organized by functional area.

    // =============================================================================
    // STORAGE CONFIGURATION
    // =============================================================================

    /// Storage key under which the credential pair is persisted.
    pub const API_KEYS_STORAGE_KEY: &str = "smart-interview-buddy-api-keys";

    /// Environment variable overriding the data directory.
    pub const HOME_ENV_VAR: &str = "INTERVIEW_BUDDY_HOME";

    /// Data directory name created under the user's home directory.
    pub const DATA_DIR_NAME: &str = ".interview-buddy";

    /// File holding the key-value storage.
    pub const STORAGE_FILE_NAME: &str = "storage.json";

    // =============================================================================
    // NOTIFICATION CONFIGURATION
    // =============================================================================

    /// The maximum number of notifications kept in the activity log.
    pub const MAX_NOTIFICATIONS: usize = 100;

    // =============================================================================
    // INTERVIEW CONFIGURATION
    // =============================================================================

    /// Interview session timing and scoring configuration
    pub mod interview {
        use std::time::Duration;

        /// Time budget for a single question (seconds)
        pub const QUESTION_TIME_SECS: u32 = 180;

        /// Simulated answer analysis delay (milliseconds)
        pub const ANALYSIS_DELAY_MS: u64 = 2_000;

        /// Interval between countdown ticks (milliseconds)
        pub const TICK_INTERVAL_MS: u64 = 1_000;

        /// Text appended to the answer when a voice recording stops
        pub const VOICE_INPUT_MARKER: &str = " [Voice input captured]";

        /// Lower bound of the mock answer score
        pub const MIN_SCORE: f64 = 40.0;

        /// Upper bound of the mock answer score
        pub const MAX_SCORE: f64 = 90.0;

        pub const fn analysis_delay() -> Duration {
            Duration::from_millis(ANALYSIS_DELAY_MS)
        }

        pub const fn tick_interval() -> Duration {
            Duration::from_millis(TICK_INTERVAL_MS)
        }
    }

    // =============================================================================
    // RESUME CONFIGURATION
    // =============================================================================

    /// Resume analysis configuration
    pub mod resume {
        use std::time::Duration;

        /// Simulated resume analysis delay (milliseconds)
        pub const ANALYSIS_DELAY_MS: u64 = 3_000;

        /// File name used when exporting an analysis report
        pub const REPORT_FILE_NAME: &str = "resume-analysis-report.txt";

        pub const fn analysis_delay() -> Duration {
            Duration::from_millis(ANALYSIS_DELAY_MS)
        }
    }

    // =============================================================================
    // CREDENTIAL CONFIGURATION
    // =============================================================================

    /// Credential connection test configuration
    pub mod credentials {
        use std::time::Duration;

        /// Simulated connection test delay (milliseconds)
        pub const CONNECTION_TEST_DELAY_MS: u64 = 1_500;

        /// A stored key must be longer than this to pass the mock test
        pub const MIN_VALID_KEY_LEN: usize = 10;

        pub const fn connection_test_delay() -> Duration {
            Duration::from_millis(CONNECTION_TEST_DELAY_MS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// Terminal event loop configuration
    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up (milliseconds)
        pub const SPLASH_DURATION_MS: u64 = 1_500;

        /// Poll interval for terminal input (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 100;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }
}

//! Session telemetry capability.
//!
//! The library never talks to a vendor SDK directly; it exposes named
//! trigger points behind a narrow trait. Every call is fire-and-forget:
//! no return value is consumed and nothing is retried.

use log::info;

/// Color theme of the engagement survey prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurveyTheme {
    #[default]
    White,
    Black,
}

impl SurveyTheme {
    pub fn name(self) -> &'static str {
        match self {
            SurveyTheme::White => "white",
            SurveyTheme::Black => "black",
        }
    }
}

/// Sink for session/analytics events.
pub trait TelemetrySink {
    fn pause_session(&mut self);
    fn resume_session(&mut self);
    fn show_survey(&mut self, theme: SurveyTheme);
    fn log_custom_event(&mut self, name: &str);
    fn set_custom_field(&mut self, name: &str, value: f64);
}

/// Sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    fn pause_session(&mut self) {}
    fn resume_session(&mut self) {}
    fn show_survey(&mut self, _theme: SurveyTheme) {}
    fn log_custom_event(&mut self, _name: &str) {}
    fn set_custom_field(&mut self, _name: &str, _value: f64) {}
}

/// Sink that writes every trigger to the log, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTelemetry;

impl TelemetrySink for LogTelemetry {
    fn pause_session(&mut self) {
        info!("telemetry: session paused");
    }

    fn resume_session(&mut self) {
        info!("telemetry: session resumed");
    }

    fn show_survey(&mut self, theme: SurveyTheme) {
        info!("telemetry: survey shown ({} theme)", theme.name());
    }

    fn log_custom_event(&mut self, name: &str) {
        info!("telemetry: custom event '{}'", name);
    }

    fn set_custom_field(&mut self, name: &str, value: f64) {
        info!("telemetry: custom field '{}' = {}", name, value);
    }
}

/// The session buttons the control panel offers, wired to a sink.
///
/// Showing a survey increments a running counter reported as the
/// `survey_counter` custom field; the black-themed variant additionally
/// records a `change-theme` event.
pub struct SessionControls<S: TelemetrySink> {
    sink: S,
    survey_counter: u64,
}

impl<S: TelemetrySink> SessionControls<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            survey_counter: 0,
        }
    }

    pub fn pause_logging(&mut self) {
        self.sink.pause_session();
    }

    pub fn resume_logging(&mut self) {
        self.sink.resume_session();
    }

    pub fn show_survey(&mut self, theme: SurveyTheme) {
        self.sink.show_survey(theme);
        if theme == SurveyTheme::Black {
            self.sink.log_custom_event("change-theme");
        }
        self.survey_counter += 1;
        self.sink
            .set_custom_field("survey_counter", self.survey_counter as f64);
    }

    pub fn survey_counter(&self) -> u64 {
        self.survey_counter
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording {
        events: Vec<String>,
        fields: Vec<(String, f64)>,
    }

    impl TelemetrySink for Recording {
        fn pause_session(&mut self) {
            self.events.push("pause".into());
        }

        fn resume_session(&mut self) {
            self.events.push("resume".into());
        }

        fn show_survey(&mut self, theme: SurveyTheme) {
            self.events.push(format!("survey:{}", theme.name()));
        }

        fn log_custom_event(&mut self, name: &str) {
            self.events.push(format!("event:{}", name));
        }

        fn set_custom_field(&mut self, name: &str, value: f64) {
            self.fields.push((name.to_string(), value));
        }
    }

    #[test]
    fn test_survey_counter_increments() {
        let mut controls = SessionControls::new(Recording::default());
        controls.show_survey(SurveyTheme::White);
        controls.show_survey(SurveyTheme::White);
        assert_eq!(controls.survey_counter(), 2);
        assert_eq!(
            controls.sink_mut().fields,
            vec![("survey_counter".to_string(), 1.0), ("survey_counter".to_string(), 2.0)]
        );
    }

    #[test]
    fn test_black_survey_records_theme_change() {
        let mut controls = SessionControls::new(Recording::default());
        controls.show_survey(SurveyTheme::Black);
        let events = &controls.sink_mut().events;
        assert!(events.contains(&"survey:black".to_string()));
        assert!(events.contains(&"event:change-theme".to_string()));
    }

    #[test]
    fn test_pause_resume_pass_through() {
        let mut controls = SessionControls::new(Recording::default());
        controls.pause_logging();
        controls.resume_logging();
        assert_eq!(controls.sink_mut().events, vec!["pause", "resume"]);
    }
}

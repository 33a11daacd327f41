//! Query interpretation: free text in, priced quote out.
//!
//! Normalization, date resolution, and attribute classification run
//! independently over the same phrase, converge into a [`StayRequest`],
//! and the pricing engine quotes it in interpreted-query mode. Every call
//! is stateless and idempotent: identical transcript and reference time
//! give byte-identical quotes.

use chrono::NaiveDateTime;
use stayquote_interpreter::{
    DateExpressionResolver, InterpretError, InterpreterConfig, RoomAttributeClassifier,
};
use stayquote_types::{QuoteDiagnostics, StayQuote, StayRequest};
use tracing::{debug, instrument};

use crate::pricing::PricingEngine;

/// Turns a voice transcript into a priced, diagnosable quote.
#[derive(Debug, Clone, Default)]
pub struct QueryInterpreter {
    engine: PricingEngine,
    resolver: DateExpressionResolver,
    classifier: RoomAttributeClassifier,
    config: InterpreterConfig,
}

impl QueryInterpreter {
    /// Interpreter over the compiled-in reference rates.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(engine: PricingEngine) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    pub fn with_config(engine: PricingEngine, config: InterpreterConfig) -> Self {
        Self {
            engine,
            config,
            ..Self::default()
        }
    }

    /// Interpret a transcript against an explicit reference time.
    ///
    /// Transcripts below the configured length are noise, not requests;
    /// callers treat the error as a no-op. Everything else produces a
    /// usable quote: unresolvable dates fall back to a one-night stay
    /// today, unresolvable attributes to a Queen room, and policy
    /// violations surface as diagnostics on the quote rather than errors.
    #[instrument(skip(self, transcript), fields(len = transcript.len()))]
    pub fn interpret(
        &self,
        transcript: &str,
        now: NaiveDateTime,
    ) -> Result<StayQuote, InterpretError> {
        let trimmed = transcript.trim();
        if trimmed.chars().count() < self.config.min_transcript_chars {
            return Err(InterpretError::TranscriptTooShort {
                len: trimmed.chars().count(),
                min: self.config.min_transcript_chars,
            });
        }

        let phrase = trimmed.to_lowercase();
        let resolved = self.resolver.resolve(&phrase, now);
        let attrs = self.classifier.classify(&phrase);
        debug!(
            nights = resolved.nights,
            bed_type = %attrs.bed_type,
            has_amenity = attrs.has_amenity,
            "transcript resolved"
        );

        let request = StayRequest {
            check_in: resolved.check_in,
            check_out: resolved.check_out,
            nights: resolved.nights,
            bed_type: attrs.bed_type,
            has_amenity: attrs.has_amenity,
            // Voice-derived requests are always non-smoking by policy.
            is_smoking: false,
        };

        let mut quote = self.engine.quote_interpreted(&request);
        quote.diagnostics = QuoteDiagnostics {
            invalid_room_type: attrs.invalid_room_type.map(|t| t.label().to_string()),
            invalid_combination: attrs.invalid_combination,
            matched_phrase: resolved.matched_phrase,
        };
        Ok(quote)
    }
}

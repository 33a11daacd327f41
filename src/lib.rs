//! stayquote: lodging stay quoting from forms or free text.
//!
//! Two kinds of input produce one kind of output:
//!
//! ```text
//! form values ──────────────────────────┐
//!                                       ▼
//!                          ┌─────────────────────────┐
//!                          │  PricingEngine          │──► StayQuote
//!                          │  short-stay/multi-night │
//!                          └─────────────────────────┘
//!                                       ▲
//! transcript ──► QueryInterpreter ──────┘
//!                │
//!                ├── DateExpressionResolver (when)
//!                └── RoomAttributeClassifier (what)
//! ```
//!
//! Everything is pure, synchronous computation over immutable values: the
//! only long-lived state is the read-only [`rates::RateTable`]. Requests
//! and quotes are allocated per call, so concurrent callers never share
//! mutable state.

pub mod interpreter;
pub mod pricing;
pub mod rates;

// Re-export commonly used types
pub use interpreter::QueryInterpreter;
pub use pricing::{PricingEngine, TaxPolicy, TAX_RATE};
pub use rates::{NightlyRates, RateTable, RateTableError, STANDARD_RATES};

// Re-export the boundary types so callers depend on one crate
pub use stayquote_interpreter::{
    DateExpressionResolver, InterpretError, InterpreterConfig, InvalidRoomType, ResolvedStay,
    RoomAttributeClassifier, RoomAttributes,
};
pub use stayquote_types::{
    BedType, DailyPriceLine, DayType, ExtraHours, HourlyTier, PaymentMethod, QuoteDiagnostics,
    StayQuote, StayRequest, CHECK_IN_HOUR, CHECK_OUT_HOUR, EARLY_CHECK_IN_MAX_HOURS,
};

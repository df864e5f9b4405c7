//! Maps service errors to surfcast_core::AppError for consistent user-facing messages.

mod lookup;

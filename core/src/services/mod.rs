//! Services exposed to callers that need to deliver verification codes.

pub mod sms;

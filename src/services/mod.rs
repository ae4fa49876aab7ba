//! Services: response text templates and score formatting.

mod templates;

pub use templates::{
    lead_in, match_label, pick_lead_in, CONNECT_FAILED, DEFAULT_QUERY_ERROR, NO_MATCHES,
};

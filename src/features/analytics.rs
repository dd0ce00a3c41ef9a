//! Interaction analytics as structured tracing events
//!
//! There is no backend; events go to the `analytics` tracing target so a
//! subscriber (or just the console in debug runs) can observe how the gift
//! is being explored.

/// Emit a named analytics event with an optional free-form detail
pub fn track_event(event: &str, detail: Option<&str>) {
    match detail {
        Some(detail) => tracing::info!(target: "analytics", event, detail),
        None => tracing::info!(target: "analytics", event),
    }
}

/// A section of the page came into focus
pub fn track_section_view(section: &str) {
    track_event("section_view", Some(section));
}

/// A component was interacted with
pub fn track_interaction(component: &str, action: &str) {
    tracing::info!(target: "analytics", event = "interaction", component, action);
}

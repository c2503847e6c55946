// Adapters layer: maps the conversion core onto transport-level responses.
// Status codes and problem URIs live here, never in domain/ or core/.

pub mod api;
pub mod problem;

//! Domain methods, grouped per API area.
//!
//! Each method is a pure mapping from typed arguments to a `(path, verb,
//! body)` triple handed to the request primitive. No argument validation
//! happens locally; malformed input is rejected by the server and surfaces as
//! an [`Error::Api`](crate::Error::Api). The only methods that touch session
//! state are `register` and `login`.

mod auth;
mod bookings;
mod listings;
mod messages;
mod payments;
mod reviews;

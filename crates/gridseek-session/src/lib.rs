//! **gridseek-session**: the command surface of gridseek.
//!
//! A [`Session`] owns one [`Grid`](gridseek_core::Grid) and at most one
//! search. Input layers translate clicks and key presses into [`Command`]s
//! and feed them to [`Session::update`]; renderers poll
//! [`Session::kinds`] or replay the per-step [`Frame`](gridseek_core::Frame)s
//! collected in a [`Recording`].
//!
//! ```
//! use gridseek_core::{Point, TypeKind};
//! use gridseek_paths::Variant;
//! use gridseek_session::{Command, Event, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default()).unwrap();
//! session
//!     .update(Command::Assign { pos: Point::new(0, 0), kind: TypeKind::Start })
//!     .unwrap();
//! session
//!     .update(Command::Assign { pos: Point::new(5, 0), kind: TypeKind::Target })
//!     .unwrap();
//! let event = session.update(Command::Run(Variant::Heuristic)).unwrap();
//! assert!(matches!(event, Event::Finished { path_len: 5, .. }));
//! ```

pub mod config;
pub mod error;
pub mod recording;
pub mod replay;
pub mod session;

pub use config::SessionConfig;
pub use error::SessionError;
pub use recording::Recording;
pub use replay::Replay;
pub use session::{Command, Event, Session};

//! Permission system for admin-only commands.
//!
//! Administrators are a fixed set of user IDs loaded from `ADMIN_IDS` at
//! startup. Membership in that set is the only authorization path.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let admins = AdminSet::new(config.admin_ids.iter().copied());
//!
//! if !require_admin(&msg, &admins, messenger).await {
//!     return Ok(()); // deny notice already sent
//! }
//! ```

mod checker;

pub use checker::{AdminSet, DENY_TEXT, is_admin, require_admin};

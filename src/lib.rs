//! # Bootstrap UI
//!
//! Bootstrap 5 presentation helpers for server-rendered views: cards,
//! description lists, nav tabs/pills and tables, assembled as markup
//! strings through imperative builder APIs.
//!
//! All four helpers share the same mechanics:
//! - an insertion-ordered [`Attributes`] map merged over per-element
//!   defaults, caller values winning;
//! - a per-helper [`StringTemplater`] holding overridable
//!   `{{attrs}}`/`{{content}}` element templates;
//! - for the stateful helpers, an accumulate-then-render lifecycle where
//!   `render` consumes the whole accumulated state, so one helper instance
//!   serves several independent render passes within a view.
//!
//! Element content is emitted verbatim; escaping it is the caller's
//! responsibility. Attribute values are escaped when formatted.
//!
//! ```
//! use bootstrap_ui::{Attributes, NavHelper, NavRenderOptions, TabOptions, TableHelper, TableRenderOptions};
//!
//! let mut nav = NavHelper::new();
//! nav.add("home", "Home", "<p>Welcome</p>", TabOptions::default())
//!     .add("profile", "Profile", "<p>Profile</p>", TabOptions::default());
//! let markup = nav.render(&NavRenderOptions::default());
//! assert!(markup.contains(r#"<ul class="nav nav-tabs" role="tablist">"#));
//!
//! let mut table = TableHelper::new();
//! table.header(vec!["ID".into(), "Name".into()], Attributes::new());
//! table.row(vec![1.into(), "Ann".into()], Attributes::new());
//! let markup = table.render(&TableRenderOptions::default());
//! assert!(markup.contains("<th>ID</th> <th>Name</th>"));
//! ```

pub mod attributes;
pub mod helpers;
pub mod icons;
pub mod templates;
pub mod urls;

pub use attributes::{AttrValue, Attributes};
pub use helpers::card::{CardHelper, CardOptions};
pub use helpers::description::{DescriptionHelper, DescriptionRenderOptions};
pub use helpers::nav::{LinkOptions, NavConfig, NavHelper, NavRenderOptions, NavType, TabOptions};
pub use helpers::table::{Cell, TableHelper, TableRenderOptions};
pub use icons::icon;
pub use templates::StringTemplater;
pub use urls::{LinkTarget, PatternResolver, UrlError, UrlResolver};

//! Services around the ranking core: candidate sources, site actions,
//! favicons and highlight rendering.

pub mod favicon;
pub mod highlight;
pub mod site_actions;
pub mod sources;

//! Route handlers, one module per view.

pub mod add_worker;
pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;

use axum::response::Html;
use minijinja::Value;

use crate::{AppState, Error};

/// Render `name` with the ambient context every page shares (the auth flag
/// and any pending flashes) merged into `ctx`.
fn render<S>(state: &AppState<S>, name: &str, ctx: Value) -> Result<Html<String>, Error> {
  let merged = minijinja::context! {
    authed  => state.session.is_authenticated(),
    flashes => state.flash.drain(),
    ..ctx
  };
  Ok(Html(state.templates.render(name, merged)?))
}

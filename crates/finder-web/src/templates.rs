//! Embedded page templates.
//!
//! Templates are compiled into the binary; there is nothing to deploy next
//! to it.

use minijinja::{Environment, Value};

pub struct Templates {
  env: Environment<'static>,
}

impl Templates {
  pub fn new() -> Result<Self, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("base.html", include_str!("../templates/base.html"))?;
    env.add_template("home.html", include_str!("../templates/home.html"))?;
    env.add_template("login.html", include_str!("../templates/login.html"))?;
    env.add_template("register.html", include_str!("../templates/register.html"))?;
    env.add_template(
      "forgot_password.html",
      include_str!("../templates/forgot_password.html"),
    )?;
    env.add_template("dashboard.html", include_str!("../templates/dashboard.html"))?;
    env.add_template("add_worker.html", include_str!("../templates/add_worker.html"))?;
    env.add_template("not_found.html", include_str!("../templates/not_found.html"))?;
    Ok(Self { env })
  }

  pub fn render(&self, name: &str, ctx: Value) -> Result<String, minijinja::Error> {
    self.env.get_template(name)?.render(ctx)
  }
}

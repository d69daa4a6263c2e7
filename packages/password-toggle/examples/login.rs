//! A login form whose password can be revealed with a checkbox.

use password_toggle::{attach, init_logging, Config};

const FORM: &str = r#"
<form method="post" action="/login">
    <label>Full name <input type="text" name="full_name" id="full_name"></label>
    <label>Password <input type="password" name="password" id="password"></label>
    <label><input type="checkbox" id="show_password"> Show password</label>
    <button type="submit">Log in</button>
</form>
"#;

fn main() {
    // Setup logging
    init_logging(tracing::Level::DEBUG);

    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        tracing::error!("this example must be run in a browser page");
        return;
    };
    body.set_inner_html(FORM);

    match attach("show_password", "password", &Config::new()) {
        Some(binding) => binding.forget(),
        None => tracing::error!("the login form is missing its checkbox"),
    }
}

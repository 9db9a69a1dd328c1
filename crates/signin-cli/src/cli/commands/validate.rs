//! Field validation report.

use signin_core::form::SignInForm;

pub fn run(email: &str, password: &str) {
    let mut form = SignInForm::new();
    form.set_email(email);
    form.set_password(password);

    let field = |valid: bool, violation: Option<&str>| match violation {
        Some(message) if !valid => format!("invalid ({message})"),
        _ => "valid".to_string(),
    };

    println!(
        "email: {}",
        field(
            form.email_valid(),
            form.email_violation().map(|r| r.message())
        )
    );
    println!(
        "password: {}",
        field(
            form.password_valid(),
            form.password_violation().map(|r| r.message())
        )
    );
    println!("login enabled: {}", form.is_login_enabled());
    println!("recover enabled: {}", form.is_recover_enabled());
}

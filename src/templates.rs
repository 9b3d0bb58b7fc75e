use std::sync::OnceLock;
use tera::Tera;

pub const CERTIFICATE_BODY: &str = "certificate_body.tera";
pub const CERTIFICATE_STANDALONE: &str = "certificate_standalone.tera";
pub const INDEX_PAGE: &str = "index.html";

static TERA: OnceLock<Tera> = OnceLock::new();

// Autoescape only applies to `.html`: certificate fields are interpolated as
// written, the form page escapes user input.
fn build_tera() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (
            CERTIFICATE_BODY,
            include_str!("../templates/certificate_body.tera"),
        ),
        (
            CERTIFICATE_STANDALONE,
            include_str!("../templates/certificate_standalone.tera"),
        ),
        (INDEX_PAGE, include_str!("../templates/index.html")),
    ])?;
    Ok(tera)
}

pub fn get_tera() -> tera::Result<&'static Tera> {
    if let Some(tera) = TERA.get() {
        return Ok(tera);
    }
    let tera = build_tera()?;
    Ok(TERA.get_or_init(|| tera))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_templates_compile() {
        let tera = get_tera().unwrap();
        let names: Vec<_> = tera.get_template_names().collect();
        assert!(names.contains(&CERTIFICATE_BODY));
        assert!(names.contains(&CERTIFICATE_STANDALONE));
        assert!(names.contains(&INDEX_PAGE));
    }
}

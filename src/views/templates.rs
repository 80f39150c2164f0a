use tera::Tera;

/// Page templates compiled into the binary. Names end in `.html`, so tera
/// escapes every interpolated value.
pub fn build() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        ("listing.html", include_str!("../../templates/listing.html")),
        ("detail.html", include_str!("../../templates/detail.html")),
        ("not_found.html", include_str!("../../templates/not_found.html")),
        ("studio.html", include_str!("../../templates/studio.html")),
    ])?;
    Ok(tera)
}

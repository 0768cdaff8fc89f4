//! Plain-text rendering of the catalog for `booking services`.

use std::fmt::Write;

use booking::Catalog;

pub fn services(catalog: &Catalog) -> String {
    let clinic = &catalog.clinic;
    let address = &clinic.address;
    let mut out = String::new();

    // writing into a String cannot fail
    let _ = writeln!(out, "{}", clinic.name);
    for line in [&address.line1, &address.line2, &address.city_line()] {
        let _ = writeln!(out, "  {line}");
    }
    let _ = writeln!(out, "  Email: {}", clinic.email);
    let _ = writeln!(out, "  Phone: {}", clinic.phone);
    let _ = writeln!(out);
    let _ = writeln!(out, "Services");
    for service in &catalog.services {
        let _ = writeln!(out, "  {}", service.name);
        let _ = writeln!(out, "    {}", service.summary());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_catalog_report() {
        assert_eq!(
            services(&Catalog::default()),
            "Gold Spa
  2525 Camino del Rio S
  Suite 315 Room B
  San Diego, CA 92108
  Email: goldspa@gmail.com
  Phone: +11 123 4567 222

Services
  Botox
    45 mins • $200
  Botox
    45 mins • $200
"
        );
    }
}

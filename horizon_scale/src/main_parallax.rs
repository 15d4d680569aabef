//! Hello-world astronomy tool: distance to Proxima Centauri from its parallax.

use horizon_scale::parallax;

fn main() {
    common::init_logging();
    log::debug!(
        "Using parallax {} arcsec",
        parallax::PROXIMA_CENTAURI_PARALLAX_ARCSEC
    );

    for line in parallax::greeting() {
        println!("{line}");
    }
}

use std::ffi::{c_char, c_int};

#[link(name = "erfa")]
extern "C" {
    // Fundamental arguments, IERS Conventions (2003)
    pub fn eraFad03(t: f64) -> f64;

    pub fn eraFae03(t: f64) -> f64;

    pub fn eraFaf03(t: f64) -> f64;

    pub fn eraFaju03(t: f64) -> f64;

    pub fn eraFal03(t: f64) -> f64;

    pub fn eraFalp03(t: f64) -> f64;

    pub fn eraFama03(t: f64) -> f64;

    pub fn eraFame03(t: f64) -> f64;

    pub fn eraFane03(t: f64) -> f64;

    pub fn eraFaom03(t: f64) -> f64;

    pub fn eraFapa03(t: f64) -> f64;

    pub fn eraFasa03(t: f64) -> f64;

    pub fn eraFaur03(t: f64) -> f64;

    pub fn eraFave03(t: f64) -> f64;

    // Sexagesimal decomposition
    pub fn eraD2tf(ndp: c_int, days: f64, sign: *mut c_char, ihmsf: *mut [c_int; 4]);

    pub fn eraA2af(ndp: c_int, angle: f64, sign: *mut c_char, idmsf: *mut [c_int; 4]);

    pub fn eraA2tf(ndp: c_int, angle: f64, sign: *mut c_char, ihmsf: *mut [c_int; 4]);
}

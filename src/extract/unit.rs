//! Closed set of recognized unit tokens.
//!
//! Suffix and prefix detection pick the longest surface form that matches,
//! so `kg` always wins over `g` and `ml` over `l` regardless of declaration
//! order. ASCII surfaces compare case-insensitively.

use serde::{Deserialize, Serialize};

/// A unit token that may follow a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// 個: generic counter, the default.
    Piece,
    /// 枚: flat things (cutlets, slices of ham).
    Sheet,
    /// 本: long things (carrots, bottles).
    Stick,
    /// 片: cloves, small cut pieces.
    Clove,
    /// つ: native generic counter.
    Tsu,
    /// ヶ: abbreviated 個.
    Ke,
    Pack,
    /// 入り: "contains N".
    Contents,
    Bag,
    Can,
    Box,
    /// 玉: heads (cabbage, lettuce, noodle balls).
    Head,
    /// 束: bunches of greens.
    Bunch,
    /// 丁: blocks of tofu.
    Block,
    /// 切れ: fillets.
    Fillet,
    /// 尾: whole fish.
    Fish,
    /// 房: bunches of bananas/grapes.
    Cluster,
    /// 株: plants (broccoli, bok choy).
    Plant,
    /// 人前: servings.
    Serving,
    Milliliter,
    Liter,
    /// リットル written out.
    LiterKana,
    Gram,
    Kilogram,
}

impl Unit {
    /// The generic counting unit used when no unit is stated.
    pub const DEFAULT: Unit = Unit::Piece;

    pub const ALL: &'static [Unit] = &[
        Unit::Piece,
        Unit::Sheet,
        Unit::Stick,
        Unit::Clove,
        Unit::Tsu,
        Unit::Ke,
        Unit::Pack,
        Unit::Contents,
        Unit::Bag,
        Unit::Can,
        Unit::Box,
        Unit::Head,
        Unit::Bunch,
        Unit::Block,
        Unit::Fillet,
        Unit::Fish,
        Unit::Cluster,
        Unit::Plant,
        Unit::Serving,
        Unit::Milliliter,
        Unit::Liter,
        Unit::LiterKana,
        Unit::Gram,
        Unit::Kilogram,
    ];

    /// Canonical token written into extracted records.
    pub fn as_str(self) -> &'static str {
        self.surfaces()[0]
    }

    /// Every accepted surface form; the first one is canonical.
    pub fn surfaces(self) -> &'static [&'static str] {
        match self {
            Unit::Piece => &["個"],
            Unit::Sheet => &["枚"],
            Unit::Stick => &["本"],
            Unit::Clove => &["片"],
            Unit::Tsu => &["つ"],
            Unit::Ke => &["ヶ", "ヵ", "ケ"],
            Unit::Pack => &["パック"],
            Unit::Contents => &["入り"],
            Unit::Bag => &["袋"],
            Unit::Can => &["缶"],
            Unit::Box => &["箱"],
            Unit::Head => &["玉"],
            Unit::Bunch => &["束"],
            Unit::Block => &["丁"],
            Unit::Fillet => &["切れ"],
            Unit::Fish => &["尾"],
            Unit::Cluster => &["房"],
            Unit::Plant => &["株"],
            Unit::Serving => &["人前"],
            Unit::Milliliter => &["ml", "cc"],
            Unit::Liter => &["l"],
            Unit::LiterKana => &["リットル"],
            Unit::Gram => &["g"],
            Unit::Kilogram => &["kg"],
        }
    }

    /// Parse a whole string as exactly one unit token.
    pub fn parse(s: &str) -> Option<Unit> {
        let s = s.trim();
        all_surfaces().find(|(surface, _)| surface_eq(s, surface)).map(|(_, unit)| unit)
    }

    /// Split a trailing unit token off `s`, returning the remaining prefix.
    pub fn strip_suffix(s: &str) -> Option<(&str, Unit)> {
        all_surfaces()
            .filter(|(surface, _)| ends_with_surface(s, surface))
            .max_by_key(|(surface, _)| surface.len())
            .map(|(surface, unit)| (&s[..s.len() - surface.len()], unit))
    }

    /// Split a leading unit token off `s`, returning the remaining suffix.
    pub fn strip_prefix(s: &str) -> Option<(Unit, &str)> {
        all_surfaces()
            .filter(|(surface, _)| starts_with_surface(s, surface))
            .max_by_key(|(surface, _)| surface.len())
            .map(|(surface, unit)| (unit, &s[surface.len()..]))
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn all_surfaces() -> impl Iterator<Item = (&'static str, Unit)> {
    Unit::ALL
        .iter()
        .flat_map(|&unit| unit.surfaces().iter().map(move |&surface| (surface, unit)))
}

fn surface_eq(s: &str, surface: &str) -> bool {
    if surface.is_ascii() {
        s.eq_ignore_ascii_case(surface)
    } else {
        s == surface
    }
}

fn ends_with_surface(s: &str, surface: &str) -> bool {
    if s.len() < surface.len() {
        return false;
    }
    let cut = s.len() - surface.len();
    s.is_char_boundary(cut) && surface_eq(&s[cut..], surface)
}

fn starts_with_surface(s: &str, surface: &str) -> bool {
    s.len() >= surface.len()
        && s.is_char_boundary(surface.len())
        && surface_eq(&s[..surface.len()], surface)
}

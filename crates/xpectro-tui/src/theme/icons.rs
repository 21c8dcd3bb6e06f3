//! Dock glyphs

use xpectro_app::MenuIcon;

pub fn menu_icon(icon: MenuIcon) -> &'static str {
    match icon {
        MenuIcon::Dashboard => "▦",
        MenuIcon::ShieldAlert => "⛨",
        MenuIcon::Mic => "♪",
        MenuIcon::PhoneOff => "☏",
        MenuIcon::Globe => "◍",
        MenuIcon::CreditCard => "▭",
        MenuIcon::LogIn => "→",
        MenuIcon::LogOut => "←",
    }
}

/// Keyboard shortcut commands. Pure so it can be tested on the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Kiss,
    Search,
    ResetZoom,
}

#[inline]
pub fn shortcut_for_key(key: &str) -> Option<Shortcut> {
    match key {
        "k" | "K" => Some(Shortcut::Kiss),
        "s" | "S" => Some(Shortcut::Search),
        "0" => Some(Shortcut::ResetZoom),
        _ => None,
    }
}

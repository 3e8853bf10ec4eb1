use serde::{ Deserialize, Serialize };

/// Intersection watcher configuration: visible fraction threshold and a
/// bottom root margin in pixels (negative shrinks the viewport).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObserverOptions {
    pub threshold: f64,
    #[serde(default)]
    pub root_margin_bottom: f64,
}

impl ObserverOptions {
    pub const fn new(threshold: f64, root_margin_bottom: f64) -> Self {
        Self { threshold, root_margin_bottom }
    }

    /// CSS margin string for `IntersectionObserverInit.rootMargin`.
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.root_margin_bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVEAL: ObserverOptions = ObserverOptions::new(0.1, -50.0);

    #[test]
    fn test_root_margin_string() {
        assert_eq!(REVEAL.root_margin(), "0px 0px -50px 0px");
        assert_eq!(ObserverOptions::new(0.5, 0.0).root_margin(), "0px 0px 0px 0px");
    }
}

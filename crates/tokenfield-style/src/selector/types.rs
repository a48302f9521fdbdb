//! Selector type definitions.

use std::fmt;

/// A complete CSS selector (e.g., ".input-element-wrapper.has-input-icon .input-icon").
///
/// A selector consists of one or more selector parts connected by combinators,
/// optionally followed by a pseudo-element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Chain of selector parts, leftmost first.
    pub parts: Vec<SelectorPart>,
    /// Combinators between parts (length = parts.len() - 1).
    pub combinators: Vec<Combinator>,
    /// Pseudo-element the rule targets instead of the subject itself.
    pub pseudo_element: Option<PseudoElement>,
}

impl Selector {
    /// Create a selector from a single part.
    pub fn from_part(part: SelectorPart) -> Self {
        Self {
            parts: vec![part],
            combinators: vec![],
            pseudo_element: None,
        }
    }

    /// Create a simple type selector.
    pub fn type_selector(tag: impl Into<String>) -> Self {
        Self::from_part(SelectorPart::type_only(tag))
    }

    /// Create a universal selector (*).
    pub fn universal() -> Self {
        Self::from_part(SelectorPart::universal())
    }

    /// Create a class selector.
    pub fn class(class_name: impl Into<String>) -> Self {
        Self::from_part(SelectorPart::class_only(class_name))
    }

    /// Append a part with the given combinator.
    pub fn combine(mut self, combinator: Combinator, part: SelectorPart) -> Self {
        if !self.parts.is_empty() {
            self.combinators.push(combinator);
        }
        self.parts.push(part);
        self
    }

    /// Add a descendant selector part.
    pub fn descendant(self, part: SelectorPart) -> Self {
        self.combine(Combinator::Descendant, part)
    }

    /// Add a child selector part.
    pub fn child(self, part: SelectorPart) -> Self {
        self.combine(Combinator::Child, part)
    }

    /// Add a general sibling selector part.
    pub fn sibling(self, part: SelectorPart) -> Self {
        self.combine(Combinator::GeneralSibling, part)
    }

    /// Target a pseudo-element of the subject.
    pub fn with_pseudo_element(mut self, pseudo: PseudoElement) -> Self {
        self.pseudo_element = Some(pseudo);
        self
    }

    /// Get the rightmost (subject) selector part.
    pub fn subject(&self) -> Option<&SelectorPart> {
        self.parts.last()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                match self.combinators.get(i - 1) {
                    Some(Combinator::Descendant) | None => write!(f, " ")?,
                    Some(Combinator::Child) => write!(f, " > ")?,
                    Some(Combinator::AdjacentSibling) => write!(f, " + ")?,
                    Some(Combinator::GeneralSibling) => write!(f, " ~ ")?,
                }
            }
            write!(f, "{}", part)?;
        }
        if let Some(pseudo) = &self.pseudo_element {
            write!(f, "::{}", pseudo)?;
        }
        Ok(())
    }
}

/// A single compound selector (e.g., "input.input:hover").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SelectorPart {
    /// Type selector (tag name or universal).
    pub type_selector: Option<TypeSelector>,
    /// ID selector (#id).
    pub id: Option<String>,
    /// Class selectors (.class).
    pub classes: Vec<String>,
    /// Pseudo-class selectors (:hover, :has(...), etc.).
    pub pseudo_classes: Vec<PseudoClass>,
}

impl SelectorPart {
    /// Create a new empty selector part.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a type-only selector.
    pub fn type_only(tag: impl Into<String>) -> Self {
        Self {
            type_selector: Some(TypeSelector::Type(tag.into())),
            ..Default::default()
        }
    }

    /// Create a universal selector part.
    pub fn universal() -> Self {
        Self {
            type_selector: Some(TypeSelector::Universal),
            ..Default::default()
        }
    }

    /// Create a class-only selector.
    pub fn class_only(class_name: impl Into<String>) -> Self {
        Self {
            classes: vec![class_name.into()],
            ..Default::default()
        }
    }

    /// Add a type selector.
    pub fn with_type(mut self, tag: impl Into<String>) -> Self {
        self.type_selector = Some(TypeSelector::Type(tag.into()));
        self
    }

    /// Add an ID selector.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class selector.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add a pseudo-class selector.
    pub fn with_pseudo(mut self, pseudo: PseudoClass) -> Self {
        self.pseudo_classes.push(pseudo);
        self
    }

    /// Check if the part has no constraints at all.
    pub fn is_empty(&self) -> bool {
        self.type_selector.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.pseudo_classes.is_empty()
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_selector {
            Some(TypeSelector::Universal) => write!(f, "*")?,
            Some(TypeSelector::Type(t)) => write!(f, "{}", t)?,
            None => {}
        }

        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }

        for class in &self.classes {
            write!(f, ".{}", class)?;
        }

        for pseudo in &self.pseudo_classes {
            write!(f, ":{}", pseudo)?;
        }

        Ok(())
    }
}

/// Type selector - matches the element tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSelector {
    /// Universal selector (*) - matches any element.
    Universal,
    /// Named tag (e.g., "input", "div").
    Type(String),
}

/// Combinator between selector parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Descendant combinator (space): matches any descendant.
    Descendant,
    /// Child combinator (>): matches direct child only.
    Child,
    /// Adjacent sibling (+): matches immediately following sibling.
    AdjacentSibling,
    /// General sibling (~): matches any following sibling.
    GeneralSibling,
}

/// Pseudo-class selectors for element state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PseudoClass {
    /// :hover - pointer is over the element.
    Hover,
    /// :focus - element has keyboard focus.
    Focus,
    /// :placeholder-shown - text control showing its placeholder.
    PlaceholderShown,
    /// :empty - no children and no text.
    Empty,
    /// :not(part) - negation.
    Not(Box<SelectorPart>),
    /// :has(part) - some descendant matches.
    Has(Box<SelectorPart>),
}

impl fmt::Display for PseudoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PseudoClass::Hover => write!(f, "hover"),
            PseudoClass::Focus => write!(f, "focus"),
            PseudoClass::PlaceholderShown => write!(f, "placeholder-shown"),
            PseudoClass::Empty => write!(f, "empty"),
            PseudoClass::Not(inner) => write!(f, "not({})", inner),
            PseudoClass::Has(inner) => write!(f, "has({})", inner),
        }
    }
}

impl PseudoClass {
    /// Parse an argument-less pseudo-class from CSS.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hover" => Some(Self::Hover),
            "focus" => Some(Self::Focus),
            "placeholder-shown" => Some(Self::PlaceholderShown),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }
}

/// Pseudo-elements a rule can style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoElement {
    /// ::placeholder - the placeholder text of a text control.
    Placeholder,
    /// ::before - generated content before the element's children.
    Before,
}

impl PseudoElement {
    /// Parse a pseudo-element name.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "placeholder" => Some(Self::Placeholder),
            "before" => Some(Self::Before),
            _ => None,
        }
    }
}

impl fmt::Display for PseudoElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PseudoElement::Placeholder => write!(f, "placeholder"),
            PseudoElement::Before => write!(f, "before"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_display() {
        let sel = Selector::class("input-element-wrapper")
            .descendant(SelectorPart::class_only("input").with_pseudo(PseudoClass::Hover));
        assert_eq!(sel.to_string(), ".input-element-wrapper .input:hover");

        let sel = Selector::class("input")
            .sibling(SelectorPart::class_only("input-close-filter-button"));
        assert_eq!(sel.to_string(), ".input ~ .input-close-filter-button");
    }

    #[test]
    fn nested_pseudo_display() {
        let part = SelectorPart::class_only("pill-container").with_pseudo(PseudoClass::Not(
            Box::new(SelectorPart::new().with_pseudo(PseudoClass::Has(Box::new(
                SelectorPart::class_only("pill"),
            )))),
        ));
        assert_eq!(part.to_string(), ".pill-container:not(:has(.pill))");
    }

    #[test]
    fn pseudo_element_display() {
        let sel = Selector::class("input").with_pseudo_element(PseudoElement::Placeholder);
        assert_eq!(sel.to_string(), ".input::placeholder");
    }

    #[test]
    fn pseudo_class_from_css() {
        assert_eq!(PseudoClass::from_css("focus"), Some(PseudoClass::Focus));
        assert_eq!(
            PseudoClass::from_css("placeholder-shown"),
            Some(PseudoClass::PlaceholderShown)
        );
        assert_eq!(PseudoClass::from_css("checked"), None);
    }
}

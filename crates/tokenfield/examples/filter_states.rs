//! Walk a filter input with pills through its content states.
//!
//! Prints the clear button visibility, the active look and the trailing
//! padding after every event.
//!
//! Run with: cargo run -p tokenfield --example filter_states

use tokenfield::prelude::*;

fn main() -> tokenfield::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let resolver = InputStyleResolver::new(InputTokens::light())?;
    let variant = InputVariant::plain().with_icon().with_pills().filter();
    let markup = InputMarkup::new().with_placeholder("Filter by tag");
    let mut input = InputTree::new(WidgetState::new(variant), markup)?;
    let mut tracker = FilterTracker::new();

    println!("Filter input states");
    println!("===================");

    let events = [
        FilterEvent::TextChanged { empty: false },
        FilterEvent::PillAdded,
        FilterEvent::TextChanged { empty: true },
        FilterEvent::PillAdded,
        FilterEvent::PillRemoved,
        FilterEvent::PillRemoved,
    ];

    report("start", &resolver.resolve(&input), tracker.state());
    for event in events {
        let content = tracker.apply(event);
        let text = if tracker.text_empty() {
            ContentState::Empty
        } else {
            ContentState::NonEmpty
        };
        input.update(
            WidgetState::new(variant)
                .with_content(text)
                .with_pill_count(tracker.pill_count()),
        )?;
        report(&format!("{event:?}"), &resolver.resolve(&input), content);
    }

    Ok(())
}

fn report(label: &str, resolved: &ResolvedInput, content: FilterContent) {
    println!(
        "{label:<32} {content:<10} close={:<5} active={:<5} padding-right={:.2}px placeholder={:?}",
        resolved.close_button_visible().unwrap_or(false),
        resolved.is_active(),
        resolved.surface.padding.right,
        resolved.placeholder_text(),
        content = format!("{content:?}"),
    );
}

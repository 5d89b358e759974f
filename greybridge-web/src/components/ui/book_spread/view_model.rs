use greybridge_story::{Choice, ContentBlock, EvidenceSpot, GameState, Page};

/// Owned snapshot of everything the spread renders for one page.
#[derive(Clone, PartialEq)]
pub struct SpreadViewModel {
    pub id: String,
    pub title: String,
    pub image: String,
    pub is_ending: bool,
    pub blocks: Vec<ContentBlock>,
    pub evidence: Vec<EvidenceSpot>,
    pub choices: Vec<Choice>,
    pub left_page_number: usize,
    pub right_page_number: usize,
}

#[must_use]
pub fn build_spread_viewmodel(page: Page<'_>, state: &GameState) -> SpreadViewModel {
    let (evidence, choices) = match page {
        Page::Entry(entry) => (entry.evidence.clone(), entry.choices.clone()),
        Page::Ending(_) => (Vec::new(), Vec::new()),
    };
    // Each visited page is a two-page spread in the physical book.
    let turned = state.visited.len();
    SpreadViewModel {
        id: page.id().to_string(),
        title: page.title().to_string(),
        image: page.left_image().to_string(),
        is_ending: page.is_ending(),
        blocks: page.content().to_vec(),
        evidence,
        choices,
        left_page_number: turned.saturating_mul(2).saturating_sub(1),
        right_page_number: turned.saturating_mul(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greybridge_story::StoryData;

    #[test]
    fn endings_carry_no_hotspots_or_choices() {
        let story = StoryData::from_json(
            r#"{
                "entries": [],
                "endings": [
                    { "id": "ending-a", "title": "The Book Closes", "left_image": "book-closes",
                      "content": [ { "text": "Dawn breaks." } ] }
                ]
            }"#,
        )
        .unwrap();
        let mut state = GameState::default();
        state.visited = vec!["ending-a".into()];
        state.current = Some("ending-a".into());
        state.current_index = Some(0);

        let vm = build_spread_viewmodel(story.page("ending-a").unwrap(), &state);
        assert!(vm.is_ending);
        assert!(vm.evidence.is_empty());
        assert!(vm.choices.is_empty());
        assert_eq!(vm.left_page_number, 1);
        assert_eq!(vm.right_page_number, 2);
    }
}

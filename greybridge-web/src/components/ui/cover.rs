use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub on_begin: Callback<()>,
}

/// The closed book. One click opens the investigation.
#[function_component(Cover)]
pub fn cover(p: &Props) -> Html {
    let onclick = p.on_begin.reform(|_: MouseEvent| ());
    html! {
        <div class="book-cover" {onclick}>
            <div class="cover-content">
                <h2>{ "CASE FILE #37" }</h2>
                <p>{ "CLASSIFIED: LEVEL 4 CLEARANCE" }</p>
                <div class="cover-instruction">{ "Click to begin investigation" }</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn cover_invites_the_reader_in() {
        let html = block_on(
            LocalServerRenderer::<Cover>::with_props(Props {
                on_begin: Callback::noop(),
            })
            .render(),
        );
        assert!(html.contains("CASE FILE #37"));
        assert!(html.contains("Click to begin investigation"));
    }
}

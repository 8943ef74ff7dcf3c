use crate::components::daisy_ui::foundation as f;
use estatedesk_grid::{DEFAULT_SIBLING_COUNT, PageItem, PaginationState};

#[derive(f::Properties, PartialEq, Clone)]
pub struct PaginationProps {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    #[prop_or(DEFAULT_SIBLING_COUNT)]
    pub sibling_count: u32,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<u32>,
}

/// "11–20 of 95", or nothing when the page is empty.
#[must_use]
pub fn summary_label(state: &PaginationState) -> Option<String> {
    state
        .item_window()
        .map(|(first, last)| format!("{first}–{last} of {}", state.total_count))
}

#[f::function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> f::Html {
    let state = match PaginationState::new(props.total, props.limit, props.page, props.sibling_count)
    {
        Ok(state) => state,
        Err(err) => {
            log::warn!("pagination not rendered: {err}");
            return f::Html::default();
        }
    };
    let range = state.range();
    if range.len() < 2 {
        return f::Html::default();
    }

    let last = state.total_pages();
    let anchor = state.clamped_page();
    let go_to = |page: u32| {
        let cb = props.on_change.clone();
        f::Callback::from(move |_| cb.emit(page))
    };
    let class = f::class_list(&["join"], &props.class);
    let summary = summary_label(&state).unwrap_or_default();

    f::html! {
        <nav class="flex items-center justify-between gap-4 py-3" aria-label="Pagination">
            <span class="pagination-summary text-sm opacity-70">{ summary }</span>
            <div class={class} role="group">
                <button
                    type="button"
                    class="join-item btn btn-sm"
                    aria-label="Previous page"
                    disabled={!state.has_previous()}
                    onclick={go_to(anchor.saturating_sub(1).max(1))}
                >{"«"}</button>
                { for range.iter().map(|item| match *item {
                    PageItem::Page(page) => {
                        let active = page == props.page;
                        let mut btn_class = f::classes!("join-item", "btn", "btn-sm");
                        if active {
                            btn_class.push("btn-active");
                        }
                        f::html! {
                            <button
                                type="button"
                                class={btn_class}
                                aria-current={active.then(|| f::AttrValue::from("page"))}
                                onclick={go_to(page)}
                            >{ page.to_string() }</button>
                        }
                    }
                    PageItem::Ellipsis => f::html! {
                        <span class="join-item btn btn-sm btn-disabled pagination-ellipsis" aria-hidden="true">{"…"}</span>
                    },
                }) }
                <button
                    type="button"
                    class="join-item btn btn-sm"
                    aria-label="Next page"
                    disabled={!state.has_next()}
                    onclick={go_to(anchor.saturating_add(1).min(last))}
                >{"»"}</button>
            </div>
        </nav>
    }
}

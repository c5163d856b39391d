use yew::prelude::*;

use crate::gallery::dataset::CategoryTag;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps<C: CategoryTag> {
    pub active: C,
    pub on_select: Callback<C>,
}

#[function_component(FilterBar)]
pub fn filter_bar<C: CategoryTag>(props: &FilterBarProps<C>) -> Html {
    html! {
        <div class="filter-bar" role="tablist">
            {
                for C::variants().iter().copied().map(|tag| {
                    let on_select = props.on_select.clone();
                    let is_active = tag == props.active;
                    html! {
                        <button
                            role="tab"
                            aria-selected={is_active.to_string()}
                            class={classes!("filter-button", is_active.then(|| "active"))}
                            onclick={Callback::from(move |_: MouseEvent| on_select.emit(tag))}
                        >
                            <span>{tag.label()}</span>
                        </button>
                    }
                })
            }
            <style>
                {r#"
                .filter-bar {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 2.5rem;
                    margin-bottom: 3rem;
                }
                .filter-button {
                    position: relative;
                    background: none;
                    border: none;
                    padding: 0.5rem 0;
                    font-family: 'Source Sans 3', sans-serif;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.12em;
                    color: #8899A6;
                    cursor: pointer;
                    transition: color 0.3s;
                }
                .filter-button::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    height: 1.5px;
                    width: 0;
                    background: #E2E8F0;
                    transition: width 0.3s;
                }
                .filter-button:hover::after {
                    width: 100%;
                }
                .filter-button.active {
                    color: #1A2B3C;
                }
                .filter-button.active::after {
                    width: 100%;
                    background: #6B9080;
                }
                @media (max-width: 768px) {
                    .filter-bar {
                        gap: 0.75rem;
                        margin-bottom: 2rem;
                    }
                    .filter-button {
                        font-size: 0.625rem;
                        padding: 0.375rem 0.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

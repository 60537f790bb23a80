//! Three-step asset registration wizard (details, photos, review).
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one `RwSignal<RegistrationWizard>` for its lifetime; leaving
//! the route drops the draft. All gating lives in `state::wizard`; this file
//! only wires DOM events to it.
//!
//! DESIGN
//! ======
//! Photos decode concurrently and are appended as each finishes. A decode
//! batch remembers the intake session it started in, so results arriving
//! after "Start over" are discarded, and `try_update` ignores results that
//! land after the page itself is gone.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::main_layout::{MainLayout, crumbs};
use crate::components::progress_indicator::{ProgressIndicator, ProgressStep};
use crate::net::submit::Submitter;
use crate::state::asset::{AssetCondition, AssetType};
use crate::state::images::{DragEventKind, MIN_IMAGES};
use crate::state::wizard::{DraftField, RegistrationWizard, SubmissionState, WizardStep};

fn wizard_steps() -> Vec<ProgressStep> {
    WizardStep::ALL
        .into_iter()
        .map(|s| ProgressStep { label: s.label().to_owned(), description: Some(s.description().to_owned()) })
        .collect()
}

#[cfg(feature = "hydrate")]
fn ingest(wizard: RwSignal<RegistrationWizard>, files: Option<web_sys::FileList>) {
    use futures::StreamExt as _;

    use crate::state::images::{decode_browser_file, decode_unordered};

    let Some(list) = files else {
        return;
    };
    let files: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
    let Some(session) = wizard.try_with_untracked(|w| w.intake_session) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let mut decoded = std::pin::pin!(decode_unordered(files, decode_browser_file));
        while let Some(image) = decoded.next().await {
            if wizard.try_update(|w| w.accept_decoded(session, image)).is_none() {
                log::debug!("image intake: page closed, abandoning batch");
                break;
            }
        }
    });
}

/// Asset registration wizard page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let wizard = RwSignal::new(RegistrationWizard::default());
    let step = Memo::new(move |_| wizard.with(|w| w.step));
    let current = Signal::derive(move || step.get().index());
    let can_proceed = move || wizard.with(RegistrationWizard::can_proceed);
    let can_retreat = move || wizard.with(RegistrationWizard::can_retreat);

    let on_back = move |_| {
        wizard.update(|w| {
            w.retreat();
        });
    };
    let on_next = move |_| {
        wizard.update(|w| {
            w.advance();
        });
    };

    view! {
        <MainLayout breadcrumbs=crumbs(&[("Assets", "/assets/register"), ("Register", "/assets/register")])>
            <div class="page page--narrow">
                <div class="page__header">
                    <h1>"Register New Asset"</h1>
                    <p class="muted">"Submit your physical asset for verification and tokenization"</p>
                </div>

                <ProgressIndicator steps=wizard_steps() current=current />

                <GlassCard gradient=true class="wizard__card">
                    {move || match step.get() {
                        WizardStep::Details => view! { <DetailsStep wizard=wizard /> }.into_any(),
                        WizardStep::Photos => view! { <PhotosStep wizard=wizard /> }.into_any(),
                        WizardStep::Review => view! { <ReviewStep wizard=wizard /> }.into_any(),
                    }}
                </GlassCard>

                <div class="wizard__nav">
                    <button
                        class="btn btn--outline"
                        disabled=move || !can_retreat()
                        on:click=on_back
                    >
                        "Back"
                    </button>
                    <Show when=move || !step.get().is_last()>
                        <button class="btn btn--accent" disabled=move || !can_proceed() on:click=on_next>
                            "Continue"
                        </button>
                    </Show>
                </div>
            </div>
        </MainLayout>
    }
}

// =============================================================================
// STEP 1: DETAILS
// =============================================================================

#[component]
fn DetailsStep(wizard: RwSignal<RegistrationWizard>) -> impl IntoView {
    let value = move |field: DraftField| wizard.with(|w| w.draft.value(field));
    let setter = move |field: DraftField| {
        move |ev: leptos::ev::Event| {
            let raw = event_target_value(&ev);
            wizard.update(|w| w.set_field(field, &raw));
        }
    };

    view! {
        <div class="form">
            <label class="form__field">
                <span>"Asset Type *"</span>
                <select class="input" prop:value=move || value(DraftField::Type) on:change=setter(DraftField::Type)>
                    <option value="">"Select asset type"</option>
                    {AssetType::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="form__field">
                <span>"Asset Name *"</span>
                <input
                    class="input"
                    type="text"
                    placeholder="e.g., 18K Gold Rolex Submariner"
                    prop:value=move || value(DraftField::Name)
                    on:input=setter(DraftField::Name)
                />
            </label>
            <label class="form__field">
                <span>"Description *"</span>
                <textarea
                    class="input"
                    rows="4"
                    placeholder="Provide detailed description including brand, model, specifications, etc."
                    prop:value=move || value(DraftField::Description)
                    on:input=setter(DraftField::Description)
                ></textarea>
            </label>
            <div class="form__row">
                <label class="form__field">
                    <span>"Estimated Value (USD) *"</span>
                    <input
                        class="input"
                        type="number"
                        placeholder="15000"
                        prop:value=move || value(DraftField::EstimatedValue)
                        on:input=setter(DraftField::EstimatedValue)
                    />
                </label>
                <label class="form__field">
                    <span>"Condition *"</span>
                    <select
                        class="input"
                        prop:value=move || value(DraftField::Condition)
                        on:change=setter(DraftField::Condition)
                    >
                        <option value="">"Select condition"</option>
                        {AssetCondition::ALL
                            .into_iter()
                            .map(|c| {
                                view! { <option value=c.as_str()>{format!("{} - {}", c.label(), c.description())}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <div class="form__row">
                <label class="form__field">
                    <span>"Purchase Date"</span>
                    <input
                        class="input"
                        type="date"
                        prop:value=move || value(DraftField::PurchaseDate)
                        on:input=setter(DraftField::PurchaseDate)
                    />
                </label>
                <label class="form__field">
                    <span>"Purchase Price (USD)"</span>
                    <input
                        class="input"
                        type="number"
                        placeholder="12000"
                        prop:value=move || value(DraftField::PurchasePrice)
                        on:input=setter(DraftField::PurchasePrice)
                    />
                </label>
            </div>
            <label class="form__field">
                <span>"Serial Number"</span>
                <input
                    class="input"
                    type="text"
                    placeholder="Optional"
                    prop:value=move || value(DraftField::SerialNumber)
                    on:input=setter(DraftField::SerialNumber)
                />
            </label>
        </div>
    }
}

// =============================================================================
// STEP 2: PHOTOS
// =============================================================================

#[component]
fn PhotosStep(wizard: RwSignal<RegistrationWizard>) -> impl IntoView {
    let images = Memo::new(move |_| wizard.with(|w| w.images.clone()));
    let drag_active = move || wizard.with(|w| w.drag.is_active());

    let on_drag = move |kind: DragEventKind| {
        move |ev: leptos::ev::DragEvent| {
            ev.prevent_default();
            wizard.maybe_update(|w| w.on_drag(kind));
        }
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        wizard.maybe_update(|w| w.on_drag(DragEventKind::Drop));
        #[cfg(feature = "hydrate")]
        ingest(wizard, ev.data_transfer().and_then(|dt| dt.files()));
    };
    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            let input = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
            if let Some(input) = input {
                ingest(wizard, input.files());
                input.set_value("");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <div class="photos">
            <div
                class="dropzone"
                class:dropzone--active=drag_active
                on:dragenter=on_drag(DragEventKind::Enter)
                on:dragover=on_drag(DragEventKind::Over)
                on:dragleave=on_drag(DragEventKind::Leave)
                on:drop=on_drop
            >
                <p class="dropzone__title">"Drop images here or click to upload"</p>
                <p class="muted">{format!("Upload at least {MIN_IMAGES} clear photos from different angles")}</p>
                <label class="btn btn--outline">
                    "Choose Files"
                    <input class="dropzone__input" type="file" accept="image/*" multiple=true on:change=on_pick />
                </label>
            </div>

            <p class="photos__count">
                {move || {
                    let count = images.with(|i| i.len());
                    format!("{count} photo{} added", if count == 1 { "" } else { "s" })
                }}
            </p>

            <div class="photos__grid">
                {move || {
                    images
                        .get()
                        .iter()
                        .enumerate()
                        .map(|(index, uri)| {
                            view! {
                                <figure class="photos__item">
                                    <img src=uri.clone() alt=format!("Asset photo {}", index + 1) />
                                    <button
                                        class="photos__remove"
                                        aria-label="Remove photo"
                                        on:click=move |_| {
                                            wizard.update(|w| {
                                                w.remove_image(index);
                                            });
                                        }
                                    >
                                        "✕"
                                    </button>
                                </figure>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

// =============================================================================
// STEP 3: REVIEW
// =============================================================================

#[component]
fn ReviewStep(wizard: RwSignal<RegistrationWizard>) -> impl IntoView {
    let submitter = expect_context::<Submitter>();
    let review = Memo::new(move |_| wizard.with(RegistrationWizard::review));
    let submission = Memo::new(move |_| wizard.with(|w| w.submission.clone()));

    let on_submit = Callback::new(move |()| {
        if matches!(wizard.get_untracked().submission, SubmissionState::Submitting | SubmissionState::Submitted(_)) {
            return;
        }
        wizard.update(|w| w.submission = SubmissionState::Submitting);
        let (draft, images) = wizard.with_untracked(|w| (w.draft.clone(), w.images.clone()));
        let submitter = submitter.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = submitter.0.submit(&draft, &images).await;
            let next = match outcome {
                Ok(receipt) => SubmissionState::Submitted(receipt),
                Err(e) => {
                    log::warn!("asset submission failed: {e}");
                    SubmissionState::Failed(e.to_string())
                }
            };
            wizard.try_update(|w| w.submission = next);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, images, submitter);
    });
    let on_restart = move |_| wizard.update(RegistrationWizard::reset);

    let row = |label: &'static str, value: String| {
        view! {
            <div class="review__row">
                <span class="muted">{label}</span>
                <span class="review__value">{value}</span>
            </div>
        }
    };

    view! {
        <div class="review">
            {move || {
                let r = review.get();
                view! {
                    {row("Asset Type", r.type_label.unwrap_or_default().to_owned())}
                    {row("Asset Name", r.name)}
                    {row("Description", r.description)}
                    {row("Estimated Value", r.estimated_value)}
                    {row("Condition", r.condition_label.unwrap_or_default().to_owned())}
                    {r.serial_number.map(|s| row("Serial Number", s))}
                    {r.purchase_date.map(|d| row("Purchase Date", d))}
                    {row("Photos", format!("{} images", r.image_count))}
                }
            }}

            {move || match submission.get() {
                SubmissionState::Idle => view! {
                    <button class="btn btn--accent review__submit" on:click=move |_| on_submit.run(())>
                        "Submit for Verification"
                    </button>
                }
                .into_any(),
                SubmissionState::Submitting => view! {
                    <button class="btn btn--accent review__submit" disabled=true>
                        "Submitting..."
                    </button>
                }
                .into_any(),
                SubmissionState::Submitted(receipt) => view! {
                    <div class="review__success">
                        <p class="review__success-title">"Asset submitted!"</p>
                        <p>"Asset ID: " <span class="mono">{receipt.asset_id}</span></p>
                        <div class="review__actions">
                            <a class="btn btn--accent" href="/assets/status">"Track Status"</a>
                            <button class="btn btn--outline" on:click=on_restart>"Register Another"</button>
                        </div>
                    </div>
                }
                .into_any(),
                SubmissionState::Failed(message) => view! {
                    <div class="review__error">
                        <p>{message}</p>
                        <button class="btn btn--accent review__submit" on:click=move |_| on_submit.run(())>
                            "Submit for Verification"
                        </button>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

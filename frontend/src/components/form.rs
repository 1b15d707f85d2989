use std::collections::BTreeMap;

use gloo_timers::future::TimeoutFuture;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::content::api;
use crate::content::error::FetchError;
use crate::content::models::{
    FieldEntry, FieldKind, FieldValue, FormDefinition, FormField, FormPayload,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// Values, per-field errors, submission phase and visibility of one form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
    errors: BTreeMap<String, String>,
    phase: FormPhase,
    visible: bool,
}

impl FormState {
    pub fn new(visible: bool) -> Self {
        Self {
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
            phase: FormPhase::Editing,
            visible,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_editable(&self) -> bool {
        matches!(self.phase, FormPhase::Editing | FormPhase::Failed)
    }

    #[cfg(test)]
    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn text(&self, field: &str) -> &str {
        match self.values.get(field) {
            Some(FieldValue::Single(value)) => value,
            _ => "",
        }
    }

    pub fn is_checked(&self, field: &str, option: &str) -> bool {
        match self.values.get(field) {
            Some(FieldValue::Many(values)) => values.iter().any(|v| v == option),
            _ => false,
        }
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    #[cfg(test)]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    fn touched(&mut self, field: &str) {
        self.errors.remove(field);
        if matches!(self.phase, FormPhase::Failed | FormPhase::Succeeded) {
            self.phase = FormPhase::Editing;
        }
    }

    pub fn set_text(&mut self, field: &str, value: String) {
        if self.phase == FormPhase::Submitting {
            return;
        }
        self.values.insert(field.to_string(), FieldValue::Single(value));
        self.touched(field);
    }

    pub fn toggle_option(&mut self, field: &str, option: &str) {
        if self.phase == FormPhase::Submitting {
            return;
        }
        let entry = self
            .values
            .entry(field.to_string())
            .or_insert_with(|| FieldValue::Many(Vec::new()));
        match entry {
            FieldValue::Many(values) => {
                if let Some(pos) = values.iter().position(|v| v == option) {
                    values.remove(pos);
                } else {
                    values.push(option.to_string());
                }
            }
            single => *single = FieldValue::Many(vec![option.to_string()]),
        }
        self.touched(field);
    }

    /// Marks every required field without a value. Returns whether the form
    /// is clean.
    pub fn validate(&mut self, form: &FormDefinition) -> bool {
        self.errors.clear();
        for field in form.fields.iter().filter(|f| f.required) {
            let missing = self.values.get(&field.id).map_or(true, FieldValue::is_blank);
            if missing {
                self.errors
                    .insert(field.id.clone(), format!("{} is required", field.label));
            }
        }
        self.errors.is_empty()
    }

    /// Moves to `Submitting` and hands back the payload to send, unless the
    /// form is already in flight or has validation errors.
    pub fn begin_submit(&mut self, form: &FormDefinition) -> Option<FormPayload> {
        if self.phase == FormPhase::Submitting || !self.validate(form) {
            return None;
        }
        self.phase = FormPhase::Submitting;

        let fields = form
            .fields
            .iter()
            .map(|field| {
                let value = self.values.get(&field.id).cloned().unwrap_or_else(|| match field.kind {
                    FieldKind::Checkboxes { .. } => FieldValue::Many(Vec::new()),
                    _ => FieldValue::Single(String::new()),
                });
                FieldEntry { field: field.id.clone(), value }
            })
            .collect();

        Some(FormPayload { form: form.id.clone(), fields })
    }

    pub fn succeed(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.phase = FormPhase::Succeeded;
    }

    /// Back to an editable form with everything the user typed still there.
    pub fn fail(&mut self, error: &FetchError) {
        log::error!("Form submission failed: {}", error);
        self.phase = FormPhase::Failed;
    }

    /// Hides the form once the success message has been shown.
    pub fn dismiss(&mut self) {
        if self.phase == FormPhase::Succeeded {
            self.visible = false;
            self.phase = FormPhase::Editing;
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        if self.phase != FormPhase::Submitting {
            self.visible = false;
        }
    }

    pub fn clear(&mut self) {
        if self.phase != FormPhase::Submitting {
            self.values.clear();
            self.errors.clear();
            self.phase = FormPhase::Editing;
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FormPanelProps {
    pub definition: FormDefinition,
    /// When set the form starts hidden behind a button with this label and
    /// opens as a modal.
    #[prop_or_default]
    pub trigger_label: Option<AttrValue>,
}

pub enum FormPanelMsg {
    Open,
    Close,
    Clear,
    SetText(String, String),
    ToggleOption(String, String),
    Submit,
    Submitted,
    SubmitFailed(FetchError),
    Dismiss,
}

pub struct FormPanel {
    state: FormState,
}

impl FormPanel {
    fn view_field(&self, ctx: &Context<Self>, field: &FormField) -> Html {
        let id = field.id.clone();
        let input_id = format!("{}-{}", ctx.props().definition.id, field.id);
        let disabled = !self.state.is_editable();
        let placeholder = field.placeholder.clone().unwrap_or_default();

        let control = match &field.kind {
            FieldKind::Text | FieldKind::Email | FieldKind::Tel => {
                let input_type = match field.kind {
                    FieldKind::Email => "email",
                    FieldKind::Tel => "tel",
                    _ => "text",
                };
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    FormPanelMsg::SetText(id.clone(), input.value())
                });
                html! {
                    <input id={input_id.clone()} type={input_type} {placeholder} {disabled}
                        value={self.state.text(&field.id).to_string()} {oninput} />
                }
            }
            FieldKind::Textarea => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    FormPanelMsg::SetText(id.clone(), input.value())
                });
                html! {
                    <textarea id={input_id.clone()} rows="4" {placeholder} {disabled}
                        value={self.state.text(&field.id).to_string()} {oninput} />
                }
            }
            FieldKind::Select { options } => {
                let onchange = ctx.link().callback(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    FormPanelMsg::SetText(id.clone(), select.value())
                });
                let current = self.state.text(&field.id);
                html! {
                    <select id={input_id.clone()} {disabled} {onchange}>
                        <option value="" selected={current.is_empty()}>{"Choose one"}</option>
                        { for options.iter().map(|option| html! {
                            <option value={option.clone()} selected={current == option.as_str()}>{option}</option>
                        }) }
                    </select>
                }
            }
            FieldKind::Checkboxes { options } => html! {
                <div class="form-choices">
                    { for options.iter().map(|option| {
                        let field_id = id.clone();
                        let value = option.clone();
                        let onchange = ctx.link().callback(move |_: Event| {
                            FormPanelMsg::ToggleOption(field_id.clone(), value.clone())
                        });
                        html! {
                            <label class="form-choice">
                                <input type="checkbox" {disabled} {onchange}
                                    checked={self.state.is_checked(&field.id, option)} />
                                {option}
                            </label>
                        }
                    }) }
                </div>
            },
        };

        let error = self.state.error(&field.id);
        html! {
            <div class={classes!("form-field", error.is_some().then_some("invalid"))}>
                <label for={input_id}>
                    {&field.label}
                    if field.required { <span class="required">{" *"}</span> }
                </label>
                {control}
                if let Some(message) = error {
                    <p class="field-error">{message}</p>
                }
            </div>
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let definition = &ctx.props().definition;
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            FormPanelMsg::Submit
        });
        let submitting = self.state.phase() == FormPhase::Submitting;

        if self.state.phase() == FormPhase::Succeeded {
            let message = definition
                .success_message
                .clone()
                .unwrap_or_else(|| "Thanks! We'll be in touch shortly.".to_string());
            return html! { <div class="form-success">{message}</div> };
        }

        html! {
            <form class="form-panel" {onsubmit} novalidate={true}>
                if let Some(title) = &definition.title {
                    <h3>{title}</h3>
                }
                { for definition.fields.iter().map(|field| self.view_field(ctx, field)) }
                <div class="form-actions">
                    <button type="submit" class="form-submit" disabled={submitting}>
                        { if submitting { "Sending..." } else { definition.submit_label.as_str() } }
                    </button>
                    <button type="button" class="form-clear" disabled={submitting}
                        onclick={ctx.link().callback(|_| FormPanelMsg::Clear)}>
                        {"Clear"}
                    </button>
                </div>
            </form>
        }
    }
}

impl Component for FormPanel {
    type Message = FormPanelMsg;
    type Properties = FormPanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: FormState::new(ctx.props().trigger_label.is_none()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FormPanelMsg::Open => self.state.open(),
            FormPanelMsg::Close => self.state.close(),
            FormPanelMsg::Clear => self.state.clear(),
            FormPanelMsg::SetText(field, value) => self.state.set_text(&field, value),
            FormPanelMsg::ToggleOption(field, option) => self.state.toggle_option(&field, &option),
            FormPanelMsg::Submit => {
                let Some(payload) = self.state.begin_submit(&ctx.props().definition) else {
                    return true;
                };
                ctx.link().send_future(async move {
                    match api::submit_form(&payload).await {
                        Ok(()) => FormPanelMsg::Submitted,
                        Err(e) => FormPanelMsg::SubmitFailed(e),
                    }
                });
            }
            FormPanelMsg::Submitted => {
                self.state.succeed();
                ctx.link().send_future(async {
                    TimeoutFuture::new(config::FORM_SUCCESS_DELAY_MS).await;
                    FormPanelMsg::Dismiss
                });
            }
            FormPanelMsg::SubmitFailed(e) => self.state.fail(&e),
            FormPanelMsg::Dismiss => self.state.dismiss(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let trigger = ctx.props().trigger_label.clone();

        if !self.state.is_visible() {
            return match trigger {
                Some(label) => html! {
                    <button class="hero-cta" onclick={ctx.link().callback(|_| FormPanelMsg::Open)}>
                        {label}
                    </button>
                },
                None => html! {
                    <div class="form-success">{"Thanks! Your request is on its way."}</div>
                },
            };
        }

        if trigger.is_none() {
            return self.view_form(ctx);
        }

        html! {
            <div class="modal-backdrop">
                <div class="modal">
                    <button class="modal-close" aria-label="Close"
                        onclick={ctx.link().callback(|_| FormPanelMsg::Close)}>
                        {"×"}
                    </button>
                    { self.view_form(ctx) }
                </div>
            </div>
        }
    }
}

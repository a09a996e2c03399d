use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::button::{Button, ButtonSize};
use super::input::{Input, Textarea};
use crate::analytics::{track, AnalyticsEvent};
use crate::form::state::{pending_timer, ContactFormState, FormAction, SubmitBlocked, SubmitStatus};
use crate::form::transport::LeadTransport;
use crate::form::validation::{EmployeeRange, Field};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub on_success: Option<Callback<()>>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let state = use_reducer(ContactFormState::default);
    // the reducer snapshot lags one render behind a double click
    let in_flight = use_mut_ref(|| false);

    {
        let status = state.status;
        let state = state.clone();
        use_effect_with_deps(
            move |status| {
                let timer = pending_timer(*status)
                    .map(|(delay, action)| Timeout::new(delay, move || state.dispatch(action)));
                move || drop(timer)
            },
            status,
        );
    }

    let edit = {
        let state = state.clone();
        move |field: Field| {
            let state = state.clone();
            Callback::from(move |value: String| {
                if !state.started {
                    track(AnalyticsEvent::FormStart);
                }
                state.dispatch(FormAction::Edit(field, value));
            })
        }
    };

    let on_employees = {
        let edit = edit(Field::Employees);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            edit.emit(select.value());
        })
    };

    let onsubmit = {
        let state = state.clone();
        let in_flight: Rc<RefCell<bool>> = in_flight.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *in_flight.borrow() {
                return;
            }
            let mut attempt = (*state).clone();
            match attempt.begin_submit() {
                Err(SubmitBlocked::InFlight) => {}
                Err(SubmitBlocked::Invalid(field)) => {
                    track(AnalyticsEvent::FormError {
                        field: field.key().to_string(),
                    });
                    state.dispatch(FormAction::Submit);
                }
                Ok(lead) => {
                    *in_flight.borrow_mut() = true;
                    state.dispatch(FormAction::Submit);
                    let state = state.clone();
                    let in_flight = in_flight.clone();
                    let on_success = on_success.clone();
                    spawn_local(async move {
                        let outcome = LeadTransport::from_config().deliver(&lead).await;
                        match &outcome {
                            Ok(()) => {
                                info!("Lead submitted");
                                track(AnalyticsEvent::FormSubmit);
                                if let Some(on_success) = &on_success {
                                    on_success.emit(());
                                }
                            }
                            Err(err) => error!("Lead submission failed: {}", err),
                        }
                        *in_flight.borrow_mut() = false;
                        state.dispatch(FormAction::Finished(outcome));
                    });
                }
            }
        })
    };

    let busy = state.is_busy();
    let values = &state.values;
    let errors = &state.errors;

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="contact-form__grid">
                <Input
                    id="name"
                    label="Nome Completo *"
                    value={values.name.clone()}
                    error={errors.get(Field::Name)}
                    placeholder="João Silva"
                    autocomplete="name"
                    inputmode="text"
                    disabled={busy}
                    oninput={edit(Field::Name)}
                />
                <Input
                    id="email"
                    label="Email Profissional *"
                    value={values.email.clone()}
                    error={errors.get(Field::Email)}
                    placeholder="joao@empresa.com"
                    autocomplete="email"
                    inputmode="email"
                    disabled={busy}
                    oninput={edit(Field::Email)}
                />
                <Input
                    id="phone"
                    label="Telefone/WhatsApp *"
                    input_type="tel"
                    value={values.phone.clone()}
                    error={errors.get(Field::Phone)}
                    placeholder="(11) 98765-4321"
                    autocomplete="tel"
                    inputmode="tel"
                    disabled={busy}
                    oninput={edit(Field::Phone)}
                />
                <Input
                    id="company"
                    label="Empresa *"
                    value={values.company.clone()}
                    error={errors.get(Field::Company)}
                    placeholder="Nome da Empresa"
                    autocomplete="organization"
                    inputmode="text"
                    disabled={busy}
                    oninput={edit(Field::Company)}
                />
            </div>

            <div class="field">
                <label class="field__label" for="employees">{"Número de Funcionários"}</label>
                <select
                    id="employees"
                    name="employees"
                    class="field__control"
                    disabled={busy}
                    onchange={on_employees}
                >
                    <option value="" selected={values.employees.is_none()}>{"Selecione..."}</option>
                    { for EmployeeRange::ALL.iter().map(|range| html! {
                        <option
                            value={range.as_str()}
                            selected={values.employees == Some(*range)}
                        >
                            {range.as_str()}
                        </option>
                    }) }
                </select>
            </div>

            <Textarea
                id="message"
                label="Mensagem *"
                value={values.message.clone()}
                error={errors.get(Field::Message)}
                placeholder="Conte-nos sobre seu desafio e como podemos ajudar..."
                disabled={busy}
                oninput={edit(Field::Message)}
            />

            if state.status == SubmitStatus::Success {
                <div class="alert alert--success" role="status">
                    {"Obrigado! Entraremos em contato em até 24h."}
                </div>
            }
            if state.status == SubmitStatus::Error {
                <div class="alert alert--error" role="alert">
                    {"Erro ao enviar formulário. Tente novamente."}
                </div>
            }

            <Button button_type="submit" size={ButtonSize::Lg} disabled={busy} class="contact-form__submit">
                { if busy { "ENVIANDO..." } else { "AGENDAR DIAGNÓSTICO GRATUITO" } }
            </Button>

            <p class="contact-form__legal">
                {"Ao enviar, você concorda com nossa "}
                <Link<Route> to={Route::Privacy}>{"Política de Privacidade"}</Link<Route>>
                {" e "}
                <Link<Route> to={Route::Terms}>{"Termos de Uso"}</Link<Route>>
            </p>
        </form>
    }
}

use yew::prelude::*;

use crate::components::container::{Container, ContainerSize, ContainerTag, ContainerVertical};
use crate::components::reveal::Reveal;
use crate::links::{on_whatsapp_click, whatsapp_link};
use crate::widgets::disclosure::{Disclosure, DisclosureAction, OpenPolicy};

const FAQ: &[(&str, &str)] = &[
    (
        "Quanto custa?",
        "Nossos planos são personalizados de acordo com suas necessidades específicas. Começamos com um diagnóstico gratuito de 30 minutos para entender seu desafio e depois apresentamos uma proposta sob medida em até 48 horas. O investimento varia conforme a complexidade do agente e integrações necessárias.",
    ),
    (
        "Preciso conhecimento técnico?",
        "Não! Toda a parte técnica é responsabilidade nossa. Você só precisa conhecer bem os seus processos de negócio. Nossa equipe de especialistas cuida de toda implementação, configuração e treinamento do agente. Fornecemos um painel intuitivo para você acompanhar resultados.",
    ),
    (
        "Quanto tempo para implementar?",
        "Garantimos implementação em 14 dias corridos. Nosso processo é: Diagnóstico (30min, grátis) → Design do Agente (3-5 dias) → Desenvolvimento (5-7 dias) → Testes e Ajustes (2-3 dias) → Go-Live. Se não entregarmos no prazo, você ganha o primeiro mês grátis.",
    ),
    (
        "Funciona 24h?",
        "Sim! Seus agentes de IA operam 24 horas por dia, 7 dias por semana, sem pausas, feriados ou ausências. Eles podem atender clientes, processar dados, enviar cobranças ou executar qualquer tarefa configurada, a qualquer momento do dia ou da noite.",
    ),
    (
        "E se o agente errar?",
        "Implementamos múltiplas camadas de segurança: validações automáticas, regras de negócio configuráveis e fallback humano para casos complexos. Além disso, seu especialista dedicado monitora performance e faz ajustes contínuos. Todos os agentes passam por fase de testes rigorosos antes do go-live.",
    ),
    (
        "Posso começar com apenas um agente?",
        "Sim, e é o que recomendamos! Começar com um agente focado no seu maior pain point permite validar resultados rapidamente. A maioria dos nossos clientes inicia com um agente (cobrança, atendimento ou qualificação) e depois expande para outras áreas conforme vê os resultados.",
    ),
    (
        "Quais integrações são possíveis?",
        "Conectamos com praticamente qualquer sistema: WhatsApp, Telegram, Gmail, Outlook, Shopify, WooCommerce, RD Station, HubSpot, Pipedrive, Asaas, Pagar.me, Bling, Conta Azul, Google Workspace, Microsoft 365, Trello, Notion, Tiny, SAP, TOTVS e muito mais. Se tem API, integramos. Se não tem, encontramos uma solução.",
    ),
    (
        "Meus dados ficam seguros?",
        "Absolutamente. Seguimos as melhores práticas de segurança e estamos em conformidade com a LGPD. Seus dados são criptografados em trânsito e em repouso. Não compartilhamos informações com terceiros. Você mantém total propriedade e controle sobre seus dados e pode solicitar exportação ou exclusão a qualquer momento.",
    ),
    (
        "Tem contrato longo de permanência?",
        "Não. Nossos contratos são mensais, sem fidelidade obrigatória. Acreditamos em reter clientes por resultados, não por amarras contratuais. Você pode cancelar a qualquer momento com apenas 30 dias de aviso prévio. Nossos clientes ficam porque funciona, não porque são obrigados.",
    ),
    (
        "Como funciona o suporte?",
        "Cada projeto tem um especialista dedicado que fica responsável pela evolução contínua do seu agente. Não é um número de suporte genérico, é uma pessoa que conhece seu negócio. Além disso, você tem acesso a nosso time via WhatsApp, email e portal. Respondemos chamados críticos em até 4 horas úteis.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };
    let answer_id = format!("faq-answer-{}", props.index);

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button
                class="faq-question"
                aria-expanded={if props.open { "true" } else { "false" }}
                aria-controls={answer_id.clone()}
                {onclick}
            >
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon" aria-hidden="true">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div id={answer_id} class={classes!("disclosure__panel", props.open.then_some("is-open"))} role="region">
                <div><p class="faq-answer">{props.answer}</p></div>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_reducer(|| Disclosure::<usize>::new(OpenPolicy::Multi));
    let on_toggle = {
        let open = open.clone();
        Callback::from(move |index: usize| open.dispatch(DisclosureAction::Toggle(index)))
    };

    html! {
        <Container
            tag={ContainerTag::Section}
            id="faq"
            size={ContainerSize::Md}
            vertical={ContainerVertical::Lg}
            class="faq"
        >
            <Reveal track_as="faq" class="section-heading">
                <h2 id="faq-heading">{"Perguntas Frequentes"}</h2>
                <p>{"Tire suas dúvidas sobre implementação, segurança e resultados"}</p>
            </Reveal>
            <div class="faq-list" role="region" aria-label="Perguntas frequentes">
                { for FAQ.iter().enumerate().map(|(index, (question, answer))| html! {
                    <FaqItem
                        {index}
                        question={*question}
                        answer={*answer}
                        open={open.is_open(&index)}
                        on_toggle={on_toggle.clone()}
                    />
                }) }
            </div>
            <div class="faq-cta">
                <p>{"Não encontrou sua resposta?"}</p>
                <a
                    href={whatsapp_link(None)}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn--secondary btn--md"
                    onclick={on_whatsapp_click("faq")}
                >
                    {"Falar com Especialista"}
                </a>
            </div>
            <style>
                {r#"
                .faq-list { display: flex; flex-direction: column; gap: 0.75rem; }
                .faq-item {
                    border: 1px solid var(--border);
                    border-radius: 1rem;
                    background: var(--surface);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem;
                    background: none;
                    border: none;
                    color: var(--text);
                    font-size: 1.05rem;
                    font-weight: 700;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon { color: var(--accent); font-size: 1.5rem; }
                .faq-answer { margin: 0; padding: 0 1.25rem 1.25rem; color: var(--muted); line-height: 1.7; }
                .faq-cta { text-align: center; margin-top: 2.5rem; }
                "#}
            </style>
        </Container>
    }
}

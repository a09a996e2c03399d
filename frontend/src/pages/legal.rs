use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::container::{Container, ContainerSize, ContainerTag, ContainerVertical};
use crate::Route;

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: &'static str,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <Container
            tag={ContainerTag::Main}
            size={ContainerSize::Md}
            vertical={ContainerVertical::Lg}
            class="legal-content"
        >
            <Link<Route> to={Route::Home} classes="legal-back">{"← Voltar ao início"}</Link<Route>>
            <h1>{props.title}</h1>
            { for props.children.iter() }
            <div class="legal-links">
                <Link<Route> to={Route::Privacy}>{"Privacidade"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Terms}>{"Termos de Uso"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Lgpd}>{"LGPD"}</Link<Route>>
            </div>
            <style>
                {r#"
                .legal-content { line-height: 1.7; }
                .legal-content h1 { font-size: 2.25rem; margin: 1.5rem 0 2rem; }
                .legal-content section {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 1.5rem 2rem;
                    margin: 1.25rem 0;
                }
                .legal-content h2 { font-size: 1.25rem; margin-top: 0; }
                .legal-content a { color: var(--accent); }
                .legal-links { margin-top: 2.5rem; text-align: center; color: var(--muted); }
                "#}
            </style>
        </Container>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Política de Privacidade">
            <section>
                <h2>{"1. Dados coletados"}</h2>
                <p>{"Coletamos apenas o que você informa no formulário de contato e na newsletter:"}</p>
                <ul>
                    <li>{"Nome, email profissional e telefone/WhatsApp"}</li>
                    <li>{"Nome da empresa e número de funcionários"}</li>
                    <li>{"A mensagem que você nos envia"}</li>
                </ul>
            </section>
            <section>
                <h2>{"2. Finalidade"}</h2>
                <p>{"Usamos esses dados para agendar o diagnóstico gratuito, enviar a proposta e, se você assinar, a newsletter."}</p>
            </section>
            <section>
                <h2>{"3. Métricas de navegação"}</h2>
                <p>{"Registramos eventos anônimos de navegação (cliques, seções visualizadas, profundidade de rolagem e tempo na página) para melhorar o site."}</p>
            </section>
            <section>
                <h2>{"4. Preferências locais"}</h2>
                <p>{"A escolha entre modo claro e escuro fica salva apenas no seu navegador."}</p>
            </section>
            <section>
                <h2>{"5. Contato"}</h2>
                <p>{"Para dúvidas sobre privacidade, escreva para privacidade@procex.ai."}</p>
            </section>
        </LegalPage>
    }
}

#[function_component(TermsOfUse)]
pub fn terms_of_use() -> Html {
    html! {
        <LegalPage title="Termos de Uso">
            <section>
                <h2>{"1. Serviço"}</h2>
                <p>{"A ProceX AI conecta pequenas e médias empresas a especialistas que desenham, desenvolvem e operam agentes de IA personalizados."}</p>
            </section>
            <section>
                <h2>{"2. Diagnóstico gratuito"}</h2>
                <p>{"O diagnóstico de 30 minutos não gera qualquer obrigação de contratação."}</p>
            </section>
            <section>
                <h2>{"3. Contratos"}</h2>
                <p>{"Os contratos são mensais, sem fidelidade, e podem ser cancelados com 30 dias de aviso prévio."}</p>
            </section>
            <section>
                <h2>{"4. Prazo de implementação"}</h2>
                <p>{"Se a implementação não for entregue em 14 dias corridos após o início do projeto, o primeiro mês é gratuito."}</p>
            </section>
        </LegalPage>
    }
}

#[function_component(LgpdNotice)]
pub fn lgpd_notice() -> Html {
    html! {
        <LegalPage title="LGPD">
            <section>
                <h2>{"Seus direitos"}</h2>
                <p>{"Nos termos da Lei Geral de Proteção de Dados (Lei nº 13.709/2018), você pode a qualquer momento:"}</p>
                <ul>
                    <li>{"Confirmar a existência de tratamento e acessar seus dados"}</li>
                    <li>{"Corrigir dados incompletos ou desatualizados"}</li>
                    <li>{"Solicitar a exportação ou a exclusão dos seus dados"}</li>
                    <li>{"Revogar o consentimento para comunicações"}</li>
                </ul>
            </section>
            <section>
                <h2>{"Segurança"}</h2>
                <p>{"Os dados são criptografados em trânsito e em repouso e não são compartilhados com terceiros."}</p>
            </section>
            <section>
                <h2>{"Encarregado"}</h2>
                <p>{"Solicitações podem ser enviadas para lgpd@procex.ai e são respondidas em até 15 dias."}</p>
            </section>
        </LegalPage>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MultiStepProps {
    pub size: u32,
    /// 1-based
    pub current_step: u32,
}

/// "Passo 2 de 4" label with one bar per step
#[function_component(MultiStep)]
pub fn multi_step(props: &MultiStepProps) -> Html {
    html! {
        <div class="multi-step">
            <span class="multi-step-label">
                {format!("Passo {} de {}", props.current_step, props.size)}
            </span>
            <div class="multi-step-steps">
                {for (1..=props.size).map(|step| html! {
                    <div key={step} class={classes!("multi-step-step", (step <= props.current_step).then_some("active"))} />
                })}
            </div>
        </div>
    }
}

use shared::{Plant, PlantState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlantCardProps {
    pub plant: Plant,
    /// Whether the plant may become active right now
    pub can_activate: bool,
    pub max_active: usize,
    pub on_toggle: Callback<String>,
}

#[function_component(PlantCard)]
pub fn plant_card(props: &PlantCardProps) -> Html {
    let is_active = props.plant.state == PlantState::Active;
    let blocked = !is_active && !props.can_activate;

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let plant_id = props.plant.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(plant_id.clone()))
    };

    let (badge, action) = if is_active {
        ("Active", "Let it rest")
    } else {
        ("Seed", "Tend gently")
    };

    html! {
        <div class="card">
            <div class="card-row">
                <div>
                    <div>{ props.plant.label.clone() }</div>
                    <span class="state-badge">{ badge }</span>
                </div>
                <button class="secondary" {onclick} disabled={blocked}>{ action }</button>
            </div>
            if blocked {
                <div class="hint">{ format!("Let's focus on {} plants at a time", props.max_active) }</div>
            }
        </div>
    }
}

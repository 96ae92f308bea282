use std::collections::BTreeMap;
use std::rc::Rc;

use carro_core::prelude::*;
use serde_json::{Value, json};

fn initial_state() -> StateMap {
    let mut state = StateMap::new();
    state.insert("count".into(), json!(0));
    state.insert("clicks".into(), json!(0));
    state
}

fn count_of(state: &StateMap, key: &str) -> i64 {
    state.get(key).and_then(Value::as_i64).unwrap_or(0)
}

fn app(host: &Instance, step: i64) -> Payload {
    let (state, set_state) = use_state(host, initial_state());
    let count = count_of(&state, "count");

    let increment: Mutation = {
        let set_state = set_state.clone();
        Rc::new(move |_: Value| {
            set_state.update(|prev| {
                let mut partial = StateMap::new();
                partial.insert("count".into(), json!(count_of(prev, "count") + step));
                partial
            })
        })
    };

    let on_click: EventHandler = {
        let increment = increment.clone();
        let set_state = set_state.clone();
        Rc::new(move |event: &Value| {
            log::info!("click at {event}");
            set_state.update(|prev| {
                let mut partial = StateMap::new();
                partial.insert("clicks".into(), json!(count_of(prev, "clicks") + 1));
                partial
            });
            increment(Value::Null);
        })
    };

    let mut computed = Computed::new();
    computed.insert("label".into(), json!(format!("Count: {count}")));

    Payload::new()
        .computed(computed)
        .effect_with_cleanup(deps![], || {
            log::info!("counter mounted");
            on_unmount(|| log::info!("counter unmounted"))
        })
        .effect(deps![count], move || log::info!("count is now {count}"))
        .events(BTreeMap::from([("click".to_string(), on_click)]))
        .methods(Methods::new())
        .mutations(BTreeMap::from([("increment".to_string(), increment)]))
        .state(state)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let use_counter = create_component_hook_with(CarroConfig::strict(), app);
    let instance = Instance::new();

    let mut carro = instance.render(|host| use_counter(host, 2))?;
    for x in [10, 20, 30] {
        (carro.events["click"])(&json!({ "x": x }));
        while instance.is_dirty() {
            carro = instance.render(|host| use_counter(host, 2))?;
        }
        let label = carro.computed["label"].as_str().unwrap_or_default();
        println!("{label} (clicks: {})", count_of(&carro.state, "clicks"));
    }

    instance.unmount();
    Ok(())
}

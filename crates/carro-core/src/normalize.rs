use crate::{Carro, CarroConfig, CarroError, Host, Payload, register_effects};

/// Registers the payload's effects with `host` and returns the record with every
/// omitted field replaced by its empty default.
pub fn use_carro<H, C, Ev, M, Mu, S>(
    host: &H,
    payload: Payload<C, Ev, M, Mu, S>,
) -> Carro<C, Ev, M, Mu, S>
where
    H: Host,
    C: Default,
    Ev: Default,
    M: Default,
    Mu: Default,
    S: Default,
{
    let Payload {
        computed,
        effects,
        events,
        methods,
        mutations,
        state,
    } = payload;

    if let Some(effects) = effects {
        register_effects(host, &effects);
    }

    Carro {
        computed: computed.unwrap_or_default(),
        events: events.unwrap_or_default(),
        methods: methods.unwrap_or_default(),
        mutations: mutations.unwrap_or_default(),
        state: state.unwrap_or_default(),
    }
}

/// [`use_carro`] honoring `config.require_all_fields`.
///
/// In strict mode the first omitted field (in declaration order) is reported and
/// nothing is registered.
pub fn use_carro_with<H, C, Ev, M, Mu, S>(
    host: &H,
    config: &CarroConfig,
    payload: Payload<C, Ev, M, Mu, S>,
) -> Result<Carro<C, Ev, M, Mu, S>, CarroError>
where
    H: Host,
    C: Default,
    Ev: Default,
    M: Default,
    Mu: Default,
    S: Default,
{
    if config.require_all_fields
        && let Some(field) = first_missing(&payload)
    {
        log::debug!("use_carro_with: rejecting payload without `{field}`");
        return Err(CarroError::MissingField { field });
    }
    Ok(use_carro(host, payload))
}

fn first_missing<C, Ev, M, Mu, S>(p: &Payload<C, Ev, M, Mu, S>) -> Option<&'static str> {
    [
        ("computed", p.computed.is_some()),
        ("effects", p.effects.is_some()),
        ("events", p.events.is_some()),
        ("methods", p.methods.is_some()),
        ("mutations", p.mutations.is_some()),
        ("state", p.state.is_some()),
    ]
    .into_iter()
    .find_map(|(field, present)| (!present).then_some(field))
}

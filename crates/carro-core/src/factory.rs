use crate::{Carro, CarroConfig, CarroError, Host, Payload, use_carro, use_carro_with};

/// Turns a payload-producing function into a hook.
///
/// Calling the result with `(host, args)` is the same as
/// `use_carro(host, hook(host, args))`. Several arguments are passed as a tuple.
///
/// ```rust
/// use carro_core::*;
///
/// let use_greeting = create_component_hook(|_host: &Instance, name: String| {
///     let mut state = StateMap::new();
///     state.insert("name".into(), name.into());
///     Payload::new().state(state)
/// });
///
/// let instance = Instance::new();
/// let carro = instance.render(|host| use_greeting(host, "Ada".to_string()));
/// assert_eq!(carro.state["name"], "Ada");
/// ```
pub fn create_component_hook<H, A, C, Ev, M, Mu, S>(
    hook: impl Fn(&H, A) -> Payload<C, Ev, M, Mu, S>,
) -> impl Fn(&H, A) -> Carro<C, Ev, M, Mu, S>
where
    H: Host,
    C: Default,
    Ev: Default,
    M: Default,
    Mu: Default,
    S: Default,
{
    move |host, args| use_carro(host, hook(host, args))
}

/// [`create_component_hook`] honoring `config`.
pub fn create_component_hook_with<H, A, C, Ev, M, Mu, S>(
    config: CarroConfig,
    hook: impl Fn(&H, A) -> Payload<C, Ev, M, Mu, S>,
) -> impl Fn(&H, A) -> Result<Carro<C, Ev, M, Mu, S>, CarroError>
where
    H: Host,
    C: Default,
    Ev: Default,
    M: Default,
    Mu: Default,
    S: Default,
{
    move |host, args| use_carro_with(host, &config, hook(host, args))
}

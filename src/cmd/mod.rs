/*!
Command dispatch module.

Layout:
  src/cmd/
    mod.rs          (module declarations + re-exports)
    schema.rs       (Parameter / ParamKind / ArgValue + validation errors)
    descriptor.rs   (CommandDescriptor + help rendering)
    parse.rs        (token list -> Binding)
    builtin.rs      (built-in command set + registry construction)
    dispatch.rs     (Registry, Dispatcher, Outcome)

Re-exports (public API expected by main.rs):
  - Dispatcher, Outcome
*/

pub mod builtin;
pub mod descriptor;
pub mod dispatch;
pub mod parse;
pub mod schema;

pub use dispatch::{Dispatcher, Outcome};

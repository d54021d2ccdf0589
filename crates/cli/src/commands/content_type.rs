use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use param_env::Environment;
use request_params::is_graphql_content_type;

use super::command::{CommandDefinition, get};

/// Check whether a Content-Type header value announces a GraphQL JSON body
pub struct ContentTypeCommandDefinition {}

impl CommandDefinition for ContentTypeCommandDefinition {
    fn command(&self) -> Command {
        Command::new("content-type")
            .about("Check whether a Content-Type header value announces a GraphQL JSON body")
            .arg(
                Arg::new("value")
                    .help("The header value, for example 'application/json; charset=UTF-8'")
                    .required(false)
                    .index(1),
            )
    }

    fn execute(&self, matches: &ArgMatches, _env: &dyn Environment) -> Result<()> {
        let value: Option<String> = get(matches, "value");

        println!("{}", is_graphql_content_type(value.as_deref()));
        Ok(())
    }
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use anyhow::Result;
use common::logging_tracing;
use param_env::SystemEnvironment;

use commands::{
    command::{CommandDefinition, SubcommandDefinition},
    content_type::ContentTypeCommandDefinition,
    decode::{DecodeBodyCommandDefinition, DecodeQueryCommandDefinition},
    encode::{GetParamsCommandDefinition, PostBodyCommandDefinition},
};

mod commands;

fn main() -> Result<()> {
    logging_tracing::init();

    let subcommand_definition = root_definition();

    let command = subcommand_definition
        .command()
        .version(env!("CARGO_PKG_VERSION"));

    let matches = command.get_matches();

    subcommand_definition.execute(&matches, &SystemEnvironment)
}

fn root_definition() -> SubcommandDefinition {
    SubcommandDefinition::new(
        "gqlp",
        "Convert GraphQL requests to and from their HTTP wire forms",
        vec![
            Box::new(PostBodyCommandDefinition {}),
            Box::new(GetParamsCommandDefinition {}),
            Box::new(DecodeBodyCommandDefinition {}),
            Box::new(DecodeQueryCommandDefinition {}),
            Box::new(ContentTypeCommandDefinition {}),
        ],
    )
}

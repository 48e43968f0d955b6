use indexmap::IndexMap;

/// Placeholder substituted with the component name.
pub const PLACEHOLDER: &str = "{name}";

pub const INDEX: &str = "\
import React from 'react'
import PropTypes from 'prop-types'
import Actions, { actionPropTypes } from './Actions'
import View from './View'

const {name} = (props) => (
  <View {...props} {...Actions(props)} />
)

const propTypes = { }

{name}.displayName = '{name}'

{name}.propTypes = propTypes

View.propTypes = {
  ...propTypes,
  ...actionPropTypes,
}

export default {name}
";

pub const SIMPLE_INDEX: &str = "\
import React from 'react'
import PropTypes from 'prop-types'
import styles from './styles.module.css'

const {name} = (props) => (
  <></>
)

{name}.displayName = '{name}'

{name}.propTypes = { }

export default {name}
";

pub const VIEW: &str = "\
import React from 'react'
import styles from './styles.module.css'

const View = (props) => (
  <>
  </>
)

View.displayName = '{name}/View'

export default View
";

pub const ACTIONS: &str = "\
import React from 'react'
import PropTypes from 'prop-types'

const Actions = (props) => { }

export const actionPropTypes = { }

export default Actions
";

pub const STYLES: &str = "";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Full,
    Simple,
}

impl Mode {
    pub fn from_simple(simple: bool) -> Self {
        if simple {
            Self::Simple
        } else {
            Self::Full
        }
    }
}

/// Filename to template body, in listing and writing order.
pub type Templates = IndexMap<&'static str, &'static str>;

pub fn get_templates(simple: bool) -> Templates {
    templates(Mode::from_simple(simple))
}

pub fn templates(mode: Mode) -> Templates {
    match mode {
        Mode::Full => IndexMap::from([
            ("index.js", INDEX),
            ("Actions.js", ACTIONS),
            ("View.js", VIEW),
            ("styles.module.css", STYLES),
        ]),
        Mode::Simple => IndexMap::from([("index.js", SIMPLE_INDEX), ("styles.module.css", STYLES)]),
    }
}

/// Replaces every placeholder in `template` with `name`. The result is not
/// scanned again, so a name containing the placeholder is left as is.
pub fn render(template: &str, name: &str) -> String {
    template.replace(PLACEHOLDER, name)
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Phone account handles.
//!
//! A [`PhoneAccountHandle`] names the telephony account a conference belongs
//! to: the component that registered it, an id unique within that component,
//! and the user profile that owns it.

use std::fmt;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::core::{ParcelError, Result};
use crate::parcel::{Parcelable, ParcelReader, ParcelWriter};

/// Package and class of an application component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentName {
    /// Package name
    pub package: String,
    /// Fully qualified class name
    pub class: String,
}

impl ComponentName {
    /// Create a component name.
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentInfo{{{}/{}}}", self.package, self.class)
    }
}

/// Owning user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserHandle(pub i32);

impl UserHandle {
    /// The primary user.
    pub const SYSTEM: UserHandle = UserHandle(0);
}

impl fmt::Display for UserHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserHandle{{{}}}", self.0)
    }
}

/// Identifies a registered telephony account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneAccountHandle {
    /// Component that registered the account
    pub component: ComponentName,
    /// Account id within the component
    pub id: String,
    /// Owning user
    #[serde(default)]
    pub user: UserHandle,
}

impl PhoneAccountHandle {
    /// Create a handle owned by `user`.
    pub fn new(component: ComponentName, id: impl Into<String>, user: UserHandle) -> Self {
        Self {
            component,
            id: id.into(),
            user,
        }
    }
}

impl fmt::Display for PhoneAccountHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.component, self.id, self.user)
    }
}

/// Read a string that must not be null.
fn read_required<R: Read>(source: &mut ParcelReader<R>, field: &str) -> Result<String> {
    let start = source.position();
    source
        .read_string()
        .map_err(|e| e.in_field(field))?
        .ok_or_else(|| ParcelError::malformed(start, "null string").in_field(field))
}

impl Parcelable for PhoneAccountHandle {
    const CLASS_NAME: &'static str = "android.telecom.PhoneAccountHandle";

    fn write_to_parcel<W: Write>(&self, dest: &mut ParcelWriter<W>) -> Result<()> {
        dest.write_string(Some(&self.component.package))?;
        dest.write_string(Some(&self.component.class))?;
        dest.write_string(Some(&self.id))?;
        dest.write_i32(self.user.0)
    }

    fn create_from_parcel<R: Read>(source: &mut ParcelReader<R>) -> Result<Self> {
        let package = read_required(source, "account.component.package")?;
        let class = read_required(source, "account.component.class")?;
        let id = read_required(source, "account.id")?;
        let user = source.read_i32().map_err(|e| e.in_field("account.user"))?;
        Ok(Self {
            component: ComponentName { package, class },
            id,
            user: UserHandle(user),
        })
    }
}

//! The D-Bus transport.

use busview_core::{Error, Introspectable, Node};
use zbus::{zvariant::OwnedValue, Connection};

const DBUS_NAME: &str = "org.freedesktop.DBus";
const DBUS_PATH: &str = "/org/freedesktop/DBus";
const INTROSPECTABLE: &str = "org.freedesktop.DBus.Introspectable";
const PROPERTIES: &str = "org.freedesktop.DBus.Properties";

/// An [`Introspectable`] provider talking to a message bus.
#[derive(Debug)]
pub struct Bus {
    conn: Connection,
}

impl Bus {
    /// Connect to the system or the session bus.
    pub async fn connect(system: bool) -> zbus::Result<Self> {
        let conn = if system {
            Connection::system().await?
        } else {
            Connection::session().await?
        };
        tracing::debug!(
            "Connected to the {} bus as {:?}",
            if system { "system" } else { "session" },
            conn.unique_name()
        );

        Ok(Self { conn })
    }
}

impl Introspectable for Bus {
    async fn introspect(&mut self, destination: &str, path: &str) -> busview_core::Result<Node> {
        let reply = self
            .conn
            .call_method(Some(destination), path, Some(INTROSPECTABLE), "Introspect", &())
            .await
            .map_err(Error::provider)?;
        let xml: String = reply.body().deserialize().map_err(Error::provider)?;

        Node::from_xml(&xml)
    }

    async fn get_property(
        &mut self,
        destination: &str,
        path: &str,
        interface: &str,
        property: &str,
    ) -> busview_core::Result<String> {
        let reply = self
            .conn
            .call_method(
                Some(destination),
                path,
                Some(PROPERTIES),
                "Get",
                &(interface, property),
            )
            .await
            .map_err(Error::provider)?;
        let value: OwnedValue = reply.body().deserialize().map_err(Error::provider)?;

        Ok(format!("{}", &*value))
    }

    async fn list_names(&mut self) -> busview_core::Result<Vec<String>> {
        let reply = self
            .conn
            .call_method(Some(DBUS_NAME), DBUS_PATH, Some(DBUS_NAME), "ListNames", &())
            .await
            .map_err(Error::provider)?;

        reply.body().deserialize().map_err(Error::provider)
    }

    async fn connection_pid(&mut self, name: &str) -> busview_core::Result<u32> {
        let reply = self
            .conn
            .call_method(
                Some(DBUS_NAME),
                DBUS_PATH,
                Some(DBUS_NAME),
                "GetConnectionUnixProcessID",
                &name,
            )
            .await
            .map_err(Error::provider)?;

        reply.body().deserialize().map_err(Error::provider)
    }
}

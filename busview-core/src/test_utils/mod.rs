mod mock_provider;
pub(crate) use mock_provider::MockProvider;

/// A document exercising all member kinds, with interleaved members and annotations.
pub(crate) const PEER_XML: &str = r#"<!DOCTYPE node PUBLIC "-//freedesktop//DTD D-BUS Object Introspection 1.0//EN"
 "http://www.freedesktop.org/standards/dbus/1.0/introspect.dtd">
<node name="/org/example">
  <interface name="org.freedesktop.DBus.Peer">
    <method name="Ping"/>
    <method name="GetMachineId">
      <arg type="s" name="machine_uuid" direction="out"/>
    </method>
  </interface>
  <interface name="org.example.Frobber">
    <method name="Frob">
      <arg name="target" type="o" direction="in"/>
      <arg type="a{sv}" direction="in"/>
      <arg name="result" type="(ib)" direction="out"/>
    </method>
    <property name="Level" type="u" access="readwrite"/>
    <signal name="Frobbed">
      <annotation name="org.freedesktop.DBus.Deprecated" value="true"/>
      <arg name="target" type="o"/>
      <arg type="as"/>
    </signal>
    <method name="Reset">
      <annotation name="org.freedesktop.DBus.Method.NoReply" value="true"/>
    </method>
    <property name="Name" type="s" access="read">
      <annotation name="org.freedesktop.DBus.Property.EmitsChangedSignal" value="const"/>
    </property>
  </interface>
  <node name="child"/>
  <node name="other"/>
</node>
"#;

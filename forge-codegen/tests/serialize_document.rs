//! Full-document tests for the serializer.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use itopforge_codegen::{SerializeOptions, Serializer, lint, serialize};
use itopforge_model::ClassDefinition;

const SERVER: &str = r##"
name = "Server"
parent = "FunctionalCI"

[properties]
db_table = "server"
naming_format = "name"

[[fields]]
name = "hostname"
type = "AttributeString"
nullable = false

[[fields]]
name = "status"
type = "AttributeEnum"
values = "production, implementation"
default_value = "production"

[[fields]]
name = "org_id"
type = "AttributeExternalKey"
target_class = "Organization"

[lifecycle]
attribute = "status"

[[lifecycle.states]]
name = "implementation"
highlight = "warning"
flags = { hostname = true }

[[lifecycle.states]]
name = "production"
highlight = "ok"

[[lifecycle.transitions]]
stimulus = "ev_deploy"
target = "production"
actions = ["SetCurrentDate"]

[[methods]]
name = "DoCheckToWrite"
code = "parent::DoCheckToWrite();"

[[indexes]]
name = "by_hostname"
fields = "hostname, org_id"

[[relations]]
type = "impacts"
neighbour_class = "ApplicationSolution"
query_down = "SELECT ApplicationSolution"
query_up = "SELECT Server"

[menu]
type = "OQLMenuNode"
parent = "ConfigManagement"
rank = 10
oql = "SELECT Server"

[[user_rights]]
name = "Administrator"
rights = { read = "allow", delete = "deny" }

[branding]
main_color = "#1a2b3c"
"##;

fn server() -> ClassDefinition {
    ClassDefinition::from_str(SERVER).expect("Failed to parse definition")
}

#[test]
fn test_full_document() {
    insta::assert_snapshot!(serialize(&server()), @r##"
    <?xml version="1.0" encoding="UTF-8"?>
    <itop_design xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" version="3.0">
      <classes>
        <class id="Server">
          <parent>FunctionalCI</parent>
          <properties>
            <category>bizmodel,searchable</category>
            <abstract>false</abstract>
            <key_type>autoincrement</key_type>
            <db_table>server</db_table>
            <db_key_field>id</db_key_field>
            <db_final_class_field>finalclass</db_final_class_field>
            <is_link>false</is_link>
            <naming_format>name</naming_format>
          </properties>
          <fields>
            <field id="hostname" xsi:type="AttributeString">
              <sql>hostname</sql>
              <default_value></default_value>
              <is_null_allowed>false</is_null_allowed>
            </field>
            <field id="status" xsi:type="AttributeEnum">
              <sql>status</sql>
              <default_value>production</default_value>
              <is_null_allowed>true</is_null_allowed>
              <values>
                <value id="0">production</value>
                <value id="1">implementation</value>
              </values>
            </field>
            <field id="org_id" xsi:type="AttributeExternalKey">
              <sql>org_id</sql>
              <default_value></default_value>
              <is_null_allowed>true</is_null_allowed>
              <target_class>Organization</target_class>
            </field>
          </fields>
          <lifecycle>
            <attribute>status</attribute>
            <states>
              <state id="implementation">
                <flags>
                  <hostname>true</hostname>
                </flags>
                <highlight>warning</highlight>
              </state>
              <state id="production">
                <flags>
                </flags>
                <highlight>ok</highlight>
              </state>
            </states>
            <transitions>
              <transition id="ev_deploy">
                <target>production</target>
                <actions>
                  <action>
                    <verb>SetCurrentDate</verb>
                  </action>
                </actions>
              </transition>
            </transitions>
          </lifecycle>
          <methods>
            <method id="DoCheckToWrite">
              <static>false</static>
              <access>public</access>
              <type>Overload-DBObject</type>
              <code><![CDATA[parent::DoCheckToWrite();]]></code>
            </method>
          </methods>
          <indexes>
            <index id="by_hostname">
              <attributes>
                <attribute id="hostname"/>
                <attribute id="org_id"/>
              </attributes>
            </index>
          </indexes>
          <relations>
            <relation id="impacts">
              <neighbours>
                <neighbour id="ApplicationSolution">
                  <query_down>SELECT ApplicationSolution</query_down>
                  <query_up>SELECT Server</query_up>
                </neighbour>
              </neighbours>
            </relation>
          </relations>
        </class>
      </classes>
      <menus>
        <menu id="Server_menu" xsi:type="OQLMenuNode">
          <rank>10</rank>
          <parent>ConfigManagement</parent>
          <oql>SELECT Server</oql>
        </menu>
      </menus>
      <user_rights>
        <profiles>
          <profile id="Administrator">
            <groups>
              <group id="Server">
                <actions>
                  <action id="action:read">allow</action>
                  <action id="action:delete">deny</action>
                </actions>
              </group>
            </groups>
          </profile>
        </profiles>
      </user_rights>
      <branding>
        <main_logo></main_logo>
        <main_color>#1a2b3c</main_color>
        <complementary_color></complementary_color>
      </branding>
    </itop_design>
    "##);
}

#[test]
fn test_minimal_document() {
    let def = ClassDefinition::from_str(r#"name = "Rack""#).unwrap();

    insta::assert_snapshot!(serialize(&def), @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <itop_design xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" version="3.0">
      <classes>
        <class id="Rack">
          <parent>cmdbAbstractObject</parent>
          <properties>
            <category>bizmodel,searchable</category>
            <abstract>false</abstract>
            <key_type>autoincrement</key_type>
            <db_key_field>id</db_key_field>
            <db_final_class_field>finalclass</db_final_class_field>
            <is_link>false</is_link>
          </properties>
          <fields>
          </fields>
        </class>
      </classes>
    </itop_design>
    "#);
}

#[test]
fn test_fixture_lints_clean() {
    assert!(lint(&server()).is_empty());
}

#[test]
fn test_serialization_is_deterministic() {
    let def = server();
    let serializer = Serializer::default();
    assert_eq!(serializer.serialize(&def), serializer.serialize(&def));
}

#[test]
fn test_verbatim_matches_escaped_for_plain_values() {
    let def = server();
    let verbatim = Serializer::new(SerializeOptions::verbatim()).serialize(&def);
    assert_eq!(verbatim, serialize(&def));
}

#[test]
fn test_reserved_characters() {
    let def = ClassDefinition::from_str(
        r#"
        name = "Server"

        [[fields]]
        name = "note"
        default_value = "<none>"

        [[methods]]
        name = "Check"
        code = "return $a && $b;"

        [menu]
        oql = "SELECT Server WHERE cpu > 2 AND name = 'a&b'"
        "#,
    )
    .unwrap();

    let escaped = serialize(&def);
    assert!(escaped.contains("<default_value>&lt;none&gt;</default_value>"));
    assert!(escaped.contains("<oql>SELECT Server WHERE cpu &gt; 2 AND name = 'a&amp;b'</oql>"));
    assert!(escaped.contains("<code><![CDATA[return $a && $b;]]></code>"));

    let verbatim = Serializer::new(SerializeOptions::verbatim()).serialize(&def);
    assert!(verbatim.contains("<default_value><none></default_value>"));
}
